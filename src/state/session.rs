// ============================================================================
// SESSION GATE - Bandera de sesión persistida en localStorage
// ============================================================================
// El "login" es una transición de estado local de la UI, no una frontera de
// seguridad: no hay backend de autenticación en este portal.
// ============================================================================

use crate::utils::storage;

/// Clave persistida. Su ausencia significa "sin sesión".
pub const SESSION_KEY: &str = "inmoleads_sesion_activa";

/// Almacenamiento inyectable para la bandera de sesión, para poder usar un
/// doble en pruebas en lugar del localStorage del navegador.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<bool>;
    fn write(&self, key: &str, value: bool) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Implementación sobre el localStorage del navegador
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<bool> {
        storage::load_from_storage(key)
    }

    fn write(&self, key: &str, value: bool) -> Result<(), String> {
        storage::save_to_storage(key, &value)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        storage::remove_from_storage(key)
    }
}

#[derive(Clone)]
pub struct SessionGate<S: SessionStorage> {
    storage: S,
}

impl SessionGate<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: SessionStorage> SessionGate<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Lee la bandera persistida; clave ausente = sin autenticar
    pub fn is_authenticated(&self) -> bool {
        self.storage.read(SESSION_KEY).unwrap_or(false)
    }

    pub fn login(&self) {
        if let Err(e) = self.storage.write(SESSION_KEY, true) {
            log::warn!("⚠️ No se pudo persistir la sesión: {}", e);
        }
        log::info!("✅ Sesión iniciada");
    }

    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            log::warn!("⚠️ No se pudo limpiar la sesión persistida: {}", e);
        }
        log::info!("👋 Sesión cerrada");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Doble en memoria del localStorage
    #[derive(Clone, Default)]
    struct MemoryStorage {
        flags: Rc<RefCell<HashMap<String, bool>>>,
    }

    impl SessionStorage for MemoryStorage {
        fn read(&self, key: &str) -> Option<bool> {
            self.flags.borrow().get(key).copied()
        }

        fn write(&self, key: &str, value: bool) -> Result<(), String> {
            self.flags.borrow_mut().insert(key.to_string(), value);
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            self.flags.borrow_mut().remove(key);
            Ok(())
        }
    }

    #[test]
    fn sin_bandera_persistida_no_hay_sesion() {
        let gate = SessionGate::new(MemoryStorage::default());
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn login_persiste_y_logout_limpia_en_memoria() {
        let storage = MemoryStorage::default();
        let gate = SessionGate::new(storage.clone());

        gate.login();
        assert!(gate.is_authenticated());
        assert_eq!(storage.read(SESSION_KEY), Some(true));

        // Una "recarga" con el mismo storage conserva la sesión
        let reloaded = SessionGate::new(storage.clone());
        assert!(reloaded.is_authenticated());

        gate.logout();
        assert!(!gate.is_authenticated());
        assert_eq!(storage.read(SESSION_KEY), None);
    }
}

// Pruebas contra el localStorage real del navegador (wasm-pack test)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_storage_hace_roundtrip_de_la_bandera() {
        let storage = BrowserStorage;
        let _ = storage.remove(SESSION_KEY);

        assert_eq!(storage.read(SESSION_KEY), None);
        storage.write(SESSION_KEY, true).unwrap();
        assert_eq!(storage.read(SESSION_KEY), Some(true));
        storage.remove(SESSION_KEY).unwrap();
        assert_eq!(storage.read(SESSION_KEY), None);
    }

    #[wasm_bindgen_test]
    fn gate_sobre_localstorage_real() {
        let gate = SessionGate::browser();
        gate.logout();

        assert!(!gate.is_authenticated());
        gate.login();
        assert!(gate.is_authenticated());
        gate.logout();
        assert!(!gate.is_authenticated());
    }
}
