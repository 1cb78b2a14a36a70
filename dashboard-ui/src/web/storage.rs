//! Browser preference storage.

use seller_dashboard::{DashboardError, DashboardResult, MemoryStore, PreferenceStore};
use web_sys::Storage;

/// `localStorage`, or memory when the browser denies storage access
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                web_sys::console::warn_1(
                    &"localStorage unavailable, theme preference will not persist".into(),
                );
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        let result = match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| DashboardError::Storage(format!("{:?}", e))),
            BrowserStore::Memory(store) => store.set(key, value),
        };

        if let Err(e) = &result {
            web_sys::console::warn_1(&format!("Failed to store {}: {}", key, e).into());
        }
        result
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let mut store = BrowserStore::open();
        assert!(matches!(store, BrowserStore::Local(_)));

        store.set("seller-dashboard-test", "light").unwrap();
        assert_eq!(store.get("seller-dashboard-test"), Some("light".to_string()));

        store.set("seller-dashboard-test", "dark").unwrap();
        assert_eq!(store.get("seller-dashboard-test"), Some("dark".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_memory_fallback_write_failure_is_an_error() {
        let mut store = BrowserStore::Memory(MemoryStore::new().read_only());
        assert!(matches!(
            store.set("seller-dashboard-test", "light"),
            Err(DashboardError::Storage(_))
        ));
        assert_eq!(store.get("seller-dashboard-test"), None);
    }
}
