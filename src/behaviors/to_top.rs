use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::host::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToTopVisibility {
    Visible,
    Hidden,
}

impl ToTopVisibility {
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            ToTopVisibility::Visible
        } else {
            ToTopVisibility::Hidden
        }
    }
}

pub fn update(control: &Element, active_class: &str, visibility: ToTopVisibility) {
    dom::set_class(control, active_class, visibility == ToTopVisibility::Visible);
}

/// Returns `Ok(false)` without touching anything when the page has no
/// scroll-to-top control.
pub fn attach<H: Host + 'static>(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    host: Rc<H>,
) -> Result<bool, SetupError> {
    let Some(control) = dom::query(document, &config.selectors.to_top)? else {
        log::debug!("No scroll-to-top control on this page");
        return Ok(false);
    };

    let threshold = config.scroll_threshold_px;
    let active_class = config.active_class.clone();
    update(&control, &active_class, ToTopVisibility::for_offset(host.scroll_y(), threshold));

    {
        let control = control.clone();
        let host = host.clone();
        dom::listen(window, "scroll", move |_| {
            let visibility = ToTopVisibility::for_offset(host.scroll_y(), threshold);
            update(&control, &active_class, visibility);
        })?;
    }

    dom::listen(&control, "click", move |e| {
        e.prevent_default();
        host.scroll_to_top();
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(ToTopVisibility::for_offset(0.0, 100.0), ToTopVisibility::Hidden);
        assert_eq!(ToTopVisibility::for_offset(100.0, 100.0), ToTopVisibility::Hidden);
        assert_eq!(ToTopVisibility::for_offset(100.5, 100.0), ToTopVisibility::Visible);
        assert_eq!(ToTopVisibility::for_offset(101.0, 100.0), ToTopVisibility::Visible);
    }

    #[test]
    fn custom_threshold() {
        assert_eq!(ToTopVisibility::for_offset(250.0, 300.0), ToTopVisibility::Hidden);
        assert_eq!(ToTopVisibility::for_offset(301.0, 300.0), ToTopVisibility::Visible);
    }
}
