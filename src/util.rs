use web_sys::Element;

/// Console logging and panic reporting; a no-op outside the browser.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Debug).unwrap_or(());
    }
}

/// `#app` when the page provides one, otherwise `<body>`.
pub fn mount_root() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id("app")
        .or_else(|| document.body().map(Element::from))
}
