//! Welcome popup: appears once after the page has loaded and blurs the main
//! content until either dismiss control is clicked.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement, Window};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::lifecycle;

const NO_BLUR: &str = "blur(0px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Hidden,
    Shown,
}

impl PopupState {
    /// `None` when there is nothing to do.
    pub fn shown(self) -> Option<Self> {
        match self {
            PopupState::Hidden => Some(PopupState::Shown),
            PopupState::Shown => None,
        }
    }

    pub fn dismissed(self) -> Option<Self> {
        match self {
            PopupState::Shown => Some(PopupState::Hidden),
            PopupState::Hidden => None,
        }
    }
}

pub struct Popup {
    popup: HtmlElement,
    main: Option<HtmlElement>,
    blur_filter: String,
    state: Cell<PopupState>,
}

impl Popup {
    pub fn new(popup: HtmlElement, main: Option<HtmlElement>, blur_filter: &str) -> Self {
        Self {
            popup,
            main,
            blur_filter: blur_filter.to_string(),
            state: Cell::new(PopupState::Hidden),
        }
    }

    pub fn state(&self) -> PopupState {
        self.state.get()
    }

    pub fn show(&self) {
        if let Some(next) = self.state().shown() {
            self.apply(next);
        }
    }

    pub fn dismiss(&self) {
        if let Some(next) = self.state().dismissed() {
            self.apply(next);
        }
    }

    fn apply(&self, state: PopupState) {
        self.state.set(state);
        let (display, filter) = match state {
            PopupState::Shown => ("block", self.blur_filter.as_str()),
            PopupState::Hidden => ("none", NO_BLUR),
        };
        dom::set_style(&self.popup, "display", display);
        if let Some(main) = &self.main {
            dom::set_style(main, "filter", filter);
        }
    }
}

/// Shows the popup `delay_ms` from now. The timer is never cancelled.
pub fn schedule(popup: Rc<Popup>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        popup.show();
        log::debug!("Popup shown");
    })
    .forget();
}

pub fn attach(
    window: &Window,
    document: &Document,
    config: &PageConfig,
) -> Result<Rc<Popup>, SetupError> {
    let selectors = &config.selectors;
    let element = dom::require_html(document, &selectors.popup)?;
    let main = match dom::require_html(document, &selectors.main) {
        Ok(main) => Some(main),
        Err(e) => {
            log::warn!("Popup will not blur the page: {}", e);
            None
        }
    };
    let popup = Rc::new(Popup::new(element, main, &config.blur_filter));

    for selector in [&selectors.popup_close, &selectors.popup_ack] {
        let control = dom::require(document, selector)?;
        let popup = popup.clone();
        dom::listen(&control, "click", move |_| popup.dismiss())?;
    }

    {
        let popup = popup.clone();
        let delay_ms = config.popup_delay_ms;
        lifecycle::on_load(window, document, move || schedule(popup, delay_ms))?;
    }

    Ok(popup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_can_only_be_shown() {
        assert_eq!(PopupState::Hidden.shown(), Some(PopupState::Shown));
        assert_eq!(PopupState::Hidden.dismissed(), None);
    }

    #[test]
    fn shown_can_only_be_dismissed() {
        assert_eq!(PopupState::Shown.dismissed(), Some(PopupState::Hidden));
        assert_eq!(PopupState::Shown.shown(), None);
    }
}
