use yew::prelude::*;

use crate::model::CharacterCard;

#[derive(Properties, PartialEq, Clone)]
pub struct CharacterCardsProps {
    pub cards: Vec<CharacterCard>,
    pub selected: Option<usize>,
    pub on_select: Callback<usize>,
}

#[function_component]
pub fn CharacterCards(props: &CharacterCardsProps) -> Html {
    html! {<div class="character-grid">
        { for props.cards.iter().enumerate().map(|(index, card)| {
            let select_cb = {
                let cb = props.on_select.clone();
                Callback::from(move |_| cb.emit(index))
            };
            let selected = props.selected == Some(index);
            html! {
                <div class={classes!("character-card", selected.then_some("selected"))} data-char={card.id.clone()} onclick={select_cb}>
                    <img src={card.image_src()} alt={card.label.clone()} />
                    <span class="character-card__name">{ card.label.clone() }</span>
                </div>
            }
        }) }
    </div>}
}
