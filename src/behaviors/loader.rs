use web_sys::{Document, HtmlElement, Window};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::lifecycle;

pub fn hide(loader: &HtmlElement) {
    dom::set_style(loader, "display", "none");
}

pub fn attach(window: &Window, document: &Document, config: &PageConfig) -> Result<(), SetupError> {
    let loader = dom::require_html(document, &config.selectors.loader)?;
    lifecycle::on_load(window, document, move || {
        hide(&loader);
        log::debug!("Loader dismissed");
    })
}
