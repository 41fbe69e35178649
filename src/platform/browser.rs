use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlInputElement, Storage};

use super::{FileDialog, KeyValueStore, PickCallback, PickedFile};
use crate::error::{PageError, js_reason};

/// `window.localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Fails when there is no window or storage is disabled (private mode, sandboxed iframe).
    pub fn open() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(PageError::StorageUnavailable),
        }
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        self.storage.get_item(key).map_err(|e| PageError::StorageRead {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PageError::StorageWrite {
                key: key.to_string(),
                reason: js_reason(&e),
            })
    }
}

/// Opens the platform file chooser through a throwaway `<input type="file">`.
/// A new input is created on every call and never attached to the document.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeFileDialog;

impl FileDialog for NativeFileDialog {
    fn open(&self, accept: &str, on_pick: PickCallback) -> Result<(), PageError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PageError::MissingNode("document"))?;
        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(PageError::dom)?
            .dyn_into()
            .map_err(|_| PageError::Dom("created element is not an <input>".into()))?;
        input.set_type("file");
        input.set_accept(accept);

        let source = input.clone();
        // Freed after the first change event. A cancelled dialog fires none and
        // the closure stays behind with the detached input.
        let on_change: js_sys::Function = Closure::once_into_js(move |_e: Event| {
            let picked = source
                .files()
                .and_then(|files| files.get(0))
                .map(|file| PickedFile { name: file.name() });
            on_pick(picked);
        })
        .unchecked_into();
        input.set_onchange(Some(&on_change));
        input.click();
        Ok(())
    }
}
