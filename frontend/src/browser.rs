use gloo_console::error;
use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Position, Storage};
use workout_tracker_lib::{
    coords::Coords, error::StoreError, location::Geolocation, notice::Notifier, storage::KeyValueStore,
};

/// `window.localStorage`
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage, StoreError> {
        window()
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.into(),
            message: format!("{e:?}"),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.into(),
            message: format!("{e:?}"),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(|e| StoreError::Write {
            key: key.into(),
            message: format!("{e:?}"),
        })
    }
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            error!(format!("Could not show alert: {:?}", e));
        }
    }
}

/// `navigator.geolocation.getCurrentPosition`
pub struct BrowserGeolocation;

impl Geolocation for BrowserGeolocation {
    fn request_current_position(&self, on_success: Box<dyn FnOnce(Coords)>, on_failure: Box<dyn FnOnce()>) {
        let Ok(geolocation) = window().navigator().geolocation() else {
            on_failure();
            return;
        };

        let success = Closure::once_into_js(move |position: Position| {
            let coords = position.coords();
            on_success(Coords::new(coords.latitude(), coords.longitude()));
        });
        let failure = Closure::once_into_js(move |_: JsValue| on_failure());

        if let Err(e) = geolocation.get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref())) {
            error!(format!("Position request failed: {:?}", e));
        }
    }
}
