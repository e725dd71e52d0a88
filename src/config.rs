use serde::{Deserialize, Serialize};

/// Valor de relleno que dejan las plantillas de .env; cuenta como "sin clave"
const PLACEHOLDER_KEY: &str = "YOUR_API_KEY_HERE";

/// Configuración del colaborador de mapas (Google Maps).
/// Sin clave válida los componentes degradan a "Mapa no disponible".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    pub api_key: String,
    pub default_zoom: u8,
    pub static_map_size: String,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_zoom: 15,
            static_map_size: "400x200".to_string(),
        }
    }
}

impl MapsConfig {
    /// Carga la configuración desde variables de entorno en tiempo de
    /// compilación (build.rs las toma de .env)
    pub fn from_env() -> Self {
        Self {
            api_key: option_env!("GOOGLE_MAPS_API_KEY").unwrap_or("").to_string(),
            default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                .unwrap_or("15")
                .parse()
                .unwrap_or(15),
            static_map_size: option_env!("STATIC_MAP_SIZE")
                .unwrap_or("400x200")
                .to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_KEY
    }

    /// URL de imagen estática para los cards; `None` sin clave válida
    pub fn static_map_url(&self, lat: f64, lng: f64, zoom: u8) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        Some(format!(
            "https://maps.googleapis.com/maps/api/staticmap?center={lat},{lng}&zoom={zoom}&size={size}&maptype=roadmap&markers=color:red%7C{lat},{lng}&key={key}",
            lat = lat,
            lng = lng,
            zoom = zoom,
            size = self.static_map_size,
            key = self.api_key,
        ))
    }

    /// URL embebible para el iframe del modal; `None` sin clave válida
    pub fn embed_map_url(&self, lat: f64, lng: f64, zoom: u8) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        Some(format!(
            "https://www.google.com/maps/embed/v1/view?key={key}&center={lat},{lng}&zoom={zoom}&maptype=roadmap",
            key = self.api_key,
            lat = lat,
            lng = lng,
            zoom = zoom,
        ))
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref MAPS: MapsConfig = MapsConfig::from_env();
}
