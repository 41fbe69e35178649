pub mod account_menu;
pub mod app;
pub mod character_cards;
pub mod upload_box;

pub use app::{App, AppProps};
