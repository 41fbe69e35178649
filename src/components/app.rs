use std::rc::Rc;
use yew::prelude::*;

use super::{account_menu::AccountMenu, character_cards::CharacterCards, upload_box::UploadBox};
use crate::config::PageConfig;
use crate::handlers;
use crate::model::{PageAction, PageState};
use crate::platform::Platform;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub platform: Platform,
    pub config: Rc<PageConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let page = {
        let config = props.config.clone();
        use_reducer(move || PageState::from_config(&config))
    };

    let toggle_menu = {
        let page = page.clone();
        Callback::from(move |()| page.dispatch(handlers::toggle_account_menu()))
    };

    let open_upload = {
        let platform = props.platform.clone();
        let config = props.config.clone();
        let dispatcher = page.dispatcher();
        Callback::from(move |()| {
            let dispatcher = dispatcher.clone();
            let dispatch = Callback::from(move |action: PageAction| dispatcher.dispatch(action));
            if let Err(err) = handlers::open_upload_dialog(&platform, &config, dispatch) {
                log::error!("could not open file dialog: {}", err);
            }
        })
    };

    let select_card = {
        let page = page.clone();
        let store = props.platform.store();
        let key = props.config.character_key.clone();
        Callback::from(move |index: usize| {
            let Some(card) = page.cards.get(index) else {
                return;
            };
            let dispatcher = page.dispatcher();
            let dispatch = Callback::from(move |action: PageAction| dispatcher.dispatch(action));
            if let Err(err) = handlers::select_character(&*store, &key, index, card, &dispatch) {
                log::error!("could not record character: {}", err);
            }
        })
    };

    let background = page
        .is_uploaded()
        .then(|| props.config.uploaded_background.clone());

    html! {<div class="upload-selection">
        <header class="header">
            <AccountMenu open={page.menu_open} links={props.config.menu_links.clone()} on_toggle={toggle_menu} />
        </header>
        <main class="main">
            <UploadBox label={page.upload_label(&props.config)} background={background} on_activate={open_upload} />
            <CharacterCards cards={page.cards.clone()} selected={page.selected} on_select={select_card} />
        </main>
    </div>}
}
