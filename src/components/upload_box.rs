use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadBoxProps {
    pub label: String,
    /// CSS background once a file has been recorded; `None` keeps the stylesheet's.
    pub background: Option<String>,
    pub on_activate: Callback<()>,
}

#[function_component]
pub fn UploadBox(props: &UploadBoxProps) -> Html {
    let activate_cb = {
        let cb = props.on_activate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let style = props
        .background
        .as_ref()
        .map(|bg| format!("background-color: {};", bg))
        .unwrap_or_default();
    html! {
        <div id="uploadBox" class="upload-box" style={style} onclick={activate_cb}>{ props.label.clone() }</div>
    }
}
