use std::rc::Rc;

use crate::error::PageError;

mod browser;
mod memory;

pub use browser::{LocalStorageStore, NativeFileDialog};
pub use memory::{MemoryStore, ScriptedDialog};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
}

impl PickedFile {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

// Called at most once, with `None` when the user backs out.
pub type PickCallback = Box<dyn FnOnce(Option<PickedFile>)>;

pub trait FileDialog {
    /// `accept` is advisory. A dialog dismissed without a change event may never call `on_pick`.
    fn open(&self, accept: &str, on_pick: PickCallback) -> Result<(), PageError>;
}

#[derive(Clone)]
pub struct Platform {
    store: Rc<dyn KeyValueStore>,
    dialog: Rc<dyn FileDialog>,
}

impl Platform {
    pub fn new(store: Rc<dyn KeyValueStore>, dialog: Rc<dyn FileDialog>) -> Self {
        Self { store, dialog }
    }

    pub fn store(&self) -> Rc<dyn KeyValueStore> {
        self.store.clone()
    }

    pub fn dialog(&self) -> Rc<dyn FileDialog> {
        self.dialog.clone()
    }
}

// Identity comparison; yew only needs to know whether the props changed.
impl PartialEq for Platform {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && Rc::ptr_eq(&self.dialog, &other.dialog)
    }
}
