use std::env;
use std::fs;
use std::path::Path;

/// Variables que config.rs lee con option_env!
const CONFIG_KEYS: [&str; 3] = ["GOOGLE_MAPS_API_KEY", "DEFAULT_MAP_ZOOM", "STATIC_MAP_SIZE"];

fn main() {
    // Cargar la configuración de mapas desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE, solo las claves que el crate consume
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    if !CONFIG_KEYS.contains(&key) {
                        continue;
                    }

                    // Solo configurar si no está ya definida
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Maps will show the unavailable placeholder. Copy .env.example to .env and set GOOGLE_MAPS_API_KEY.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
