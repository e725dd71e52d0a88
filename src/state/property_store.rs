// ============================================================================
// PROPERTY STORE - Fuente única de verdad de la cartera durante la sesión
// ============================================================================

use crate::models::{seed_properties, Property};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("propiedad desconocida: {0}")]
    UnknownId(String),
}

/// Colección ordenada de propiedades. Los registros se reemplazan por `id`;
/// nunca se crean ni se eliminan durante la sesión.
#[derive(Clone, PartialEq, Debug)]
pub struct PropertyStore {
    properties: Vec<Property>,
}

impl PropertyStore {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Store inicial con la cartera asignada
    pub fn with_seed() -> Self {
        Self::new(seed_properties())
    }

    /// Registros actuales en orden de inserción estable
    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Reemplaza el registro cuyo `id` coincide, conservando su posición.
    pub fn update(&mut self, record: Property) -> Result<(), StoreError> {
        match self.properties.iter_mut().find(|p| p.id == record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::UnknownId(record.id)),
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self::with_seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyStatus;

    fn store() -> PropertyStore {
        PropertyStore::with_seed()
    }

    #[test]
    fn update_reemplaza_solo_el_registro_indicado() {
        let mut store = store();
        let before = store.all().to_vec();

        let mut updated = before[1].clone();
        updated.status = PropertyStatus::Visitada;
        updated.comentarios_cliente = Some("Revisada en sitio.".to_string());
        store.update(updated.clone()).unwrap();

        assert_eq!(store.len(), before.len());
        for (i, original) in before.iter().enumerate() {
            let actual = &store.all()[i];
            assert_eq!(actual.id, original.id, "el orden debe ser estable");
            if i == 1 {
                assert_eq!(actual, &updated);
            } else {
                assert_eq!(actual, original);
            }
        }
    }

    #[test]
    fn update_con_id_desconocido_regresa_error() {
        let mut store = store();
        let before = store.all().to_vec();

        let mut ghost = before[0].clone();
        ghost.id = "prop-999".to_string();
        let err = store.update(ghost).unwrap_err();

        assert_eq!(err, StoreError::UnknownId("prop-999".to_string()));
        assert_eq!(store.all(), &before[..], "un error no debe mutar el store");
    }

    #[test]
    fn get_encuentra_por_id() {
        let store = store();
        assert!(store.get("prop-003").is_some());
        assert!(store.get("prop-404").is_none());
    }
}
