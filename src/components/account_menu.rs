use yew::prelude::*;

use crate::config::MenuLink;

#[derive(Properties, PartialEq, Clone)]
pub struct AccountMenuProps {
    pub open: bool,
    pub links: Vec<MenuLink>,
    pub on_toggle: Callback<()>,
}

#[function_component]
pub fn AccountMenu(props: &AccountMenuProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let menu_style = menu_style(props.open);
    html! {<div class="account">
        <button id="accountBtn" class="account-btn" onclick={toggle_cb}>{"Account"}</button>
        <div id="accountMenu" class="account-menu" style={menu_style}>
            { for props.links.iter().map(|link| html! {
                <a class="account-menu__link" href={link.href.clone()}>{ link.label.clone() }</a>
            }) }
        </div>
    </div>}
}

// Set both ways so a stylesheet that hides the menu by default cannot win.
pub fn menu_style(open: bool) -> &'static str {
    if open { "display:block;" } else { "display:none;" }
}
