use std::rc::Rc;
use yew::Callback;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::model::{CharacterCard, PageAction};
use crate::platform::{KeyValueStore, PickedFile, Platform};

pub fn toggle_account_menu() -> PageAction {
    log::debug!("account menu toggled");
    PageAction::ToggleMenu
}

// Write first: a rejected write leaves the label alone.
pub fn record_upload(
    store: &dyn KeyValueStore,
    key: &str,
    picked: Option<PickedFile>,
) -> Result<Option<PageAction>, PageError> {
    let Some(file) = picked else {
        return Ok(None);
    };
    store.set(key, &file.name)?;
    log::debug!("recorded upload {:?}", file.name);
    Ok(Some(PageAction::FileUploaded {
        file_name: file.name,
    }))
}

pub fn open_upload_dialog(
    platform: &Platform,
    config: &PageConfig,
    dispatch: Callback<PageAction>,
) -> Result<(), PageError> {
    let store: Rc<dyn KeyValueStore> = platform.store();
    let key = config.upload_key.clone();
    platform.dialog().open(
        &config.accept_hint(),
        Box::new(move |picked| match record_upload(&*store, &key, picked) {
            Ok(Some(action)) => dispatch.emit(action),
            Ok(None) => log::debug!("upload dialog closed without a file"),
            Err(err) => log::error!("could not record upload: {}", err),
        }),
    )
}

// Highlight moves before the write, so a rejected write only loses the stored id.
pub fn select_character(
    store: &dyn KeyValueStore,
    key: &str,
    index: usize,
    card: &CharacterCard,
    dispatch: &Callback<PageAction>,
) -> Result<(), PageError> {
    dispatch.emit(PageAction::SelectCard { index });
    store.set(key, &card.id)?;
    log::debug!("selected character {}", card.id);
    Ok(())
}
