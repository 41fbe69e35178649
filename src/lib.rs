use std::rc::Rc;
use web_sys::Element;
use yew::AppHandle;

pub mod components;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod platform;
mod util;

use components::{App, AppProps};
pub use config::PageConfig;
pub use error::PageError;
use platform::{FileDialog, KeyValueStore, LocalStorageStore, MemoryStore, NativeFileDialog, Platform};

/// A mounted page. Dropping it leaves the page running; call `dispose` to unmount.
pub struct PageHandle {
    app: AppHandle<App>,
}

impl PageHandle {
    pub fn dispose(self) {
        self.app.destroy();
    }
}

/// Mounts the page under `root`, reading overrides from its `data-page-config` attribute.
pub fn register_handlers(
    root: Element,
    storage: Rc<dyn KeyValueStore>,
    dialog: Rc<dyn FileDialog>,
) -> Result<PageHandle, PageError> {
    let config = PageConfig::from_root(&root)?;
    Ok(register_handlers_with_config(root, storage, dialog, config))
}

pub fn register_handlers_with_config(
    root: Element,
    storage: Rc<dyn KeyValueStore>,
    dialog: Rc<dyn FileDialog>,
    config: PageConfig,
) -> PageHandle {
    let props = AppProps {
        platform: Platform::new(storage, dialog),
        config: Rc::new(config),
    };
    let app = yew::Renderer::<App>::with_root_and_props(root, props).render();
    PageHandle { app }
}

/// Browser entry point: logging, real localStorage and file dialog, mounted on `#app` or `<body>`.
pub fn start() {
    util::init_logging();
    let Some(root) = util::mount_root() else {
        log::error!("no document to mount into");
        return;
    };

    let storage: Rc<dyn KeyValueStore> = match LocalStorageStore::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            log::warn!("{}; selections will not survive a reload", err);
            Rc::new(MemoryStore::new())
        }
    };
    let dialog: Rc<dyn FileDialog> = Rc::new(NativeFileDialog);

    let _page = match register_handlers(root.clone(), storage.clone(), dialog.clone()) {
        Ok(page) => page,
        Err(err) => {
            log::error!("{}; falling back to defaults", err);
            register_handlers_with_config(root, storage, dialog, PageConfig::default())
        }
    };
    log::info!("upload page mounted");
}
