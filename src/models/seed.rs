use super::property::{Coordinates, Property, PropertyStatus, PropertyType};

/// Cartera de propiedades asignadas al inversionista.
/// Se carga una sola vez al arrancar; no hay backend en esta versión.
pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-001".to_string(),
            nombre: "Casa Fracc. Los Olivos".to_string(),
            direccion: "Av. de los Olivos 214, Tlajomulco de Zúñiga, Jal.".to_string(),
            tipo: PropertyType::Casa,
            habitaciones: 2,
            banos: 1,
            superficie_m2: 65.0,
            adeudo_infonavit: 385_000.0,
            adeudo_agua: 4_250.5,
            adeudo_luz: 1_180.0,
            adeudo_predial: 6_400.0,
            status: PropertyStatus::Pendiente,
            coordenadas: Coordinates {
                lat: 20.473_12,
                lng: -103.443_87,
            },
            comentarios_cliente: None,
        },
        Property {
            id: "prop-002".to_string(),
            nombre: "Departamento Torre Alba".to_string(),
            direccion: "Calz. Independencia Nte. 1550, Int. 402, Guadalajara, Jal.".to_string(),
            tipo: PropertyType::Departamento,
            habitaciones: 2,
            banos: 2,
            superficie_m2: 78.5,
            adeudo_infonavit: 512_300.0,
            adeudo_agua: 0.0,
            adeudo_luz: 2_340.75,
            adeudo_predial: 9_850.0,
            status: PropertyStatus::EnRevision,
            coordenadas: Coordinates {
                lat: 20.696_41,
                lng: -103.331_52,
            },
            comentarios_cliente: Some("Falta validar adeudo de predial con el municipio.".to_string()),
        },
        Property {
            id: "prop-003".to_string(),
            nombre: "Casa Valle de los Sauces".to_string(),
            direccion: "Circuito Sauce Llorón 87, Zapopan, Jal.".to_string(),
            tipo: PropertyType::Casa,
            habitaciones: 3,
            banos: 2,
            superficie_m2: 120.0,
            adeudo_infonavit: 742_800.0,
            adeudo_agua: 8_900.0,
            adeudo_luz: 560.0,
            adeudo_predial: 12_300.25,
            status: PropertyStatus::Viable,
            coordenadas: Coordinates {
                lat: 20.721_88,
                lng: -103.391_24,
            },
            comentarios_cliente: None,
        },
        Property {
            id: "prop-004".to_string(),
            nombre: "Casa Hacienda Santa Fe".to_string(),
            direccion: "Priv. Hacienda del Carmen 33, Tlajomulco de Zúñiga, Jal.".to_string(),
            tipo: PropertyType::Casa,
            habitaciones: 2,
            banos: 1,
            superficie_m2: 58.0,
            adeudo_infonavit: 298_450.0,
            adeudo_agua: 15_200.0,
            adeudo_luz: 3_480.0,
            adeudo_predial: 2_150.0,
            status: PropertyStatus::NoViable,
            coordenadas: Coordinates {
                lat: 20.525_73,
                lng: -103.402_65,
            },
            comentarios_cliente: Some(
                "Invasión reportada por el vecino; requiere revisión jurídica.".to_string(),
            ),
        },
        Property {
            id: "prop-005".to_string(),
            nombre: "Departamento Mitras Centro".to_string(),
            direccion: "Calle Amazonas 712, Depto. 8, Monterrey, N.L.".to_string(),
            tipo: PropertyType::Departamento,
            habitaciones: 1,
            banos: 1,
            superficie_m2: 52.3,
            adeudo_infonavit: 431_900.0,
            adeudo_agua: 1_030.0,
            adeudo_luz: 0.0,
            adeudo_predial: 5_670.5,
            status: PropertyStatus::Visitada,
            coordenadas: Coordinates {
                lat: 25.684_95,
                lng: -100.344_71,
            },
            comentarios_cliente: Some("Visita realizada; el edificio está en buen estado.".to_string()),
        },
        Property {
            id: "prop-006".to_string(),
            nombre: "Casa Real del Sol".to_string(),
            direccion: "And. Sol Poniente 145, Tonalá, Jal.".to_string(),
            tipo: PropertyType::Casa,
            habitaciones: 3,
            banos: 2,
            superficie_m2: 96.0,
            adeudo_infonavit: 615_000.0,
            adeudo_agua: 2_780.0,
            adeudo_luz: 4_920.3,
            adeudo_predial: 8_010.0,
            status: PropertyStatus::Pendiente,
            coordenadas: Coordinates {
                lat: 20.624_30,
                lng: -103.233_16,
            },
            comentarios_cliente: None,
        },
    ]
}
