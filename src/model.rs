//! Page state for the upload-selection screen.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::PageConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCard {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl CharacterCard {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            image: None,
        }
    }

    pub fn image_src(&self) -> String {
        match &self.image {
            Some(src) => src.clone(),
            None => format!("/static/img/{}.png", self.id),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Empty,
    Uploaded {
        file_name: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    pub menu_open: bool,
    pub upload: UploadStatus,
    pub cards: Vec<CharacterCard>,
    // single slot: at most one card is ever selected
    pub selected: Option<usize>,
}

impl PageState {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            menu_open: config.menu_open,
            upload: UploadStatus::Empty,
            cards: config.characters.clone(),
            selected: None,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn selected_card(&self) -> Option<&CharacterCard> {
        self.selected.and_then(|i| self.cards.get(i))
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self.upload, UploadStatus::Uploaded { .. })
    }

    pub fn upload_label(&self, config: &PageConfig) -> String {
        match &self.upload {
            UploadStatus::Empty => config.upload_prompt.clone(),
            UploadStatus::Uploaded { file_name } => {
                format!("{}{}", config.uploaded_prefix, file_name)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    ToggleMenu,
    FileUploaded { file_name: String },
    SelectCard { index: usize },
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PageAction::*;
        let mut new = (*self).clone();
        match action {
            ToggleMenu => {
                new.menu_open = !new.menu_open;
            }
            FileUploaded { file_name } => {
                new.upload = UploadStatus::Uploaded { file_name };
            }
            SelectCard { index } => {
                if index >= new.cards.len() {
                    return self;
                }
                new.selected = Some(index);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> Rc<PageState> {
        Rc::new(PageState::from_config(&PageConfig::default()))
    }

    #[test]
    fn toggling_menu_flips_and_restores() {
        let start = initial();
        let mut state = start.clone();
        for n in 1..=6 {
            state = state.reduce(PageAction::ToggleMenu);
            let flipped = n % 2 == 1;
            assert_eq!(state.menu_open, start.menu_open ^ flipped, "after {n} toggles");
        }
    }

    #[test]
    fn upload_sets_label_with_prefix() {
        let config = PageConfig::default();
        let state = initial().reduce(PageAction::FileUploaded {
            file_name: "slides.pptx".into(),
        });
        assert!(state.is_uploaded());
        assert_eq!(state.upload_label(&config), "Uploaded: slides.pptx");
    }

    #[test]
    fn empty_upload_shows_prompt() {
        let config = PageConfig::default();
        let state = initial();
        assert!(!state.is_uploaded());
        assert_eq!(state.upload_label(&config), config.upload_prompt);
    }

    #[test]
    fn later_card_replaces_earlier_selection() {
        let state = initial()
            .reduce(PageAction::SelectCard { index: 0 })
            .reduce(PageAction::SelectCard { index: 1 });
        assert!(!state.is_selected(0));
        assert!(state.is_selected(1));
        assert_eq!(state.selected_card().map(|c| c.id.as_str()), Some("chhota_bheem"));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let state = initial().reduce(PageAction::SelectCard { index: 0 });
        let same = state.clone().reduce(PageAction::SelectCard { index: 99 });
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn actions_touch_only_their_own_field() {
        let start = initial();
        let after_card = start.clone().reduce(PageAction::SelectCard { index: 1 });
        assert_eq!(after_card.menu_open, start.menu_open);
        assert_eq!(after_card.upload, start.upload);

        let after_menu = after_card.clone().reduce(PageAction::ToggleMenu);
        assert_eq!(after_menu.selected, after_card.selected);
        assert_eq!(after_menu.upload, after_card.upload);

        let after_upload = after_menu.clone().reduce(PageAction::FileUploaded {
            file_name: "slides.pptx".into(),
        });
        assert_eq!(after_upload.selected, after_menu.selected);
        assert_eq!(after_upload.menu_open, after_menu.menu_open);
    }

    #[test]
    fn image_defaults_to_static_folder() {
        let card = CharacterCard::new("doraemon", "Doraemon");
        assert_eq!(card.image_src(), "/static/img/doraemon.png");
        let custom = CharacterCard {
            image: Some("/cdn/d.webp".into()),
            ..card
        };
        assert_eq!(custom.image_src(), "/cdn/d.webp");
    }
}
