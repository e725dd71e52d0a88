use serde::{Deserialize, Serialize};

/// Etapa del pipeline de una propiedad dentro del portal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Pendiente,
    Visitada,
    Viable,
    NoViable,
    EnRevision,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 5] = [
        PropertyStatus::Pendiente,
        PropertyStatus::Visitada,
        PropertyStatus::Viable,
        PropertyStatus::NoViable,
        PropertyStatus::EnRevision,
    ];

    /// Etiqueta visible en el dashboard y los badges
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Pendiente => "Pendiente",
            PropertyStatus::Visitada => "Visitada",
            PropertyStatus::Viable => "Viable",
            PropertyStatus::NoViable => "No Viable",
            PropertyStatus::EnRevision => "En Revisión",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PropertyStatus::Pendiente => "badge badge-pendiente",
            PropertyStatus::Visitada => "badge badge-visitada",
            PropertyStatus::Viable => "badge badge-viable",
            PropertyStatus::NoViable => "badge badge-no-viable",
            PropertyStatus::EnRevision => "badge badge-en-revision",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Casa,
    Departamento,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Casa => "Casa",
            PropertyType::Departamento => "Departamento",
        }
    }
}

/// Geolocalización inmutable de la propiedad
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Property {
    pub id: String,
    pub nombre: String,
    pub direccion: String,
    pub tipo: PropertyType,
    pub habitaciones: u32,
    pub banos: u32,
    pub superficie_m2: f64,
    // Adeudos en MXN
    pub adeudo_infonavit: f64,
    pub adeudo_agua: f64,
    pub adeudo_luz: f64,
    pub adeudo_predial: f64,
    pub status: PropertyStatus,
    pub coordenadas: Coordinates,
    #[serde(default)]
    pub comentarios_cliente: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializa_con_etiquetas_originales() {
        let json = serde_json::to_string(&PropertyStatus::NoViable).unwrap();
        assert_eq!(json, "\"no_viable\"");
        let json = serde_json::to_string(&PropertyStatus::EnRevision).unwrap();
        assert_eq!(json, "\"en_revision\"");

        let parsed: PropertyStatus = serde_json::from_str("\"pendiente\"").unwrap();
        assert_eq!(parsed, PropertyStatus::Pendiente);
    }

    #[test]
    fn tipo_serializa_en_minusculas() {
        assert_eq!(
            serde_json::to_string(&PropertyType::Departamento).unwrap(),
            "\"departamento\""
        );
    }
}
