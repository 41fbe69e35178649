//! Page configuration, overridable from the root's `data-page-config` JSON.

use serde::{Deserialize, Serialize};
use web_sys::Element;

use crate::error::PageError;
use crate::model::CharacterCard;

pub const CONFIG_ATTRIBUTE: &str = "data-page-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub upload_key: String,
    pub character_key: String,
    pub upload_accept: Vec<String>,
    pub upload_prompt: String,
    pub uploaded_prefix: String,
    pub uploaded_background: String,
    pub menu_open: bool,
    pub menu_links: Vec<MenuLink>,
    pub characters: Vec<CharacterCard>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            upload_key: "uploadedPPT".to_string(),
            character_key: "selectedCharacter".to_string(),
            upload_accept: vec![".ppt".into(), ".pptx".into(), ".pdf".into()],
            upload_prompt: "Click to upload your presentation".to_string(),
            uploaded_prefix: "Uploaded: ".to_string(),
            uploaded_background: "var(--first-color-alt)".to_string(),
            menu_open: false,
            menu_links: vec![
                MenuLink {
                    label: "Dashboard".into(),
                    href: "/dashboard".into(),
                },
                MenuLink {
                    label: "Logout".into(),
                    href: "/logout".into(),
                },
            ],
            characters: vec![
                CharacterCard::new("doraemon", "Doraemon"),
                CharacterCard::new("chhota_bheem", "Chhota Bheem"),
            ],
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads `data-page-config` from `root`, or the defaults when the attribute is absent.
    pub fn from_root(root: &Element) -> Result<Self, PageError> {
        match root.get_attribute(CONFIG_ATTRIBUTE) {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn accept_hint(&self) -> String {
        self.upload_accept.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = PageConfig::default();
        assert_eq!(config.upload_key, "uploadedPPT");
        assert_eq!(config.character_key, "selectedCharacter");
        assert_eq!(config.accept_hint(), ".ppt,.pptx,.pdf");
        assert_eq!(config.uploaded_background, "var(--first-color-alt)");
        assert!(!config.menu_open);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = PageConfig::from_json(r#"{"character_key":"hero","menu_open":true}"#)
            .expect("valid config");
        assert_eq!(config.character_key, "hero");
        assert!(config.menu_open);
        assert_eq!(config.upload_key, "uploadedPPT");
        assert_eq!(config.characters.len(), 2);
    }

    #[test]
    fn characters_can_be_replaced() {
        let config = PageConfig::from_json(
            r#"{"characters":[{"id":"motu","label":"Motu","image":"/img/m.png"}]}"#,
        )
        .expect("valid config");
        assert_eq!(config.characters.len(), 1);
        assert_eq!(config.characters[0].image_src(), "/img/m.png");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PageConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }
}
