use log::Level;
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` block a page can use
/// to override any of the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub nav_toggle: String,
    pub fragment_anchors: String,
    pub loader: String,
    pub main: String,
    pub popup: String,
    pub popup_close: String,
    pub popup_ack: String,
    pub form: String,
    pub to_top: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: ".navbar".to_string(),
            nav_toggle: ".menu-toggle".to_string(),
            fragment_anchors: "a[href^=\"#\"]".to_string(),
            loader: "#preloader".to_string(),
            main: ".main".to_string(),
            popup: ".popup".to_string(),
            popup_close: ".close".to_string(),
            popup_ack: ".click".to_string(),
            form: "#form".to_string(),
            to_top: "a.to-top".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    /// Class toggled on the nav panel and the scroll-to-top control.
    pub active_class: String,
    pub popup_delay_ms: u32,
    /// The to-top control shows once the scroll offset is strictly above this.
    pub scroll_threshold_px: f64,
    pub blur_filter: String,
    pub submit_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            active_class: "active".to_string(),
            popup_delay_ms: 2_000,
            scroll_threshold_px: 100.0,
            blur_filter: "blur(2px)".to_string(),
            submit_message: "Your form has been submitted successfully".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page, falling back to the defaults when the
    /// block is absent or malformed.
    pub fn from_document(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("Loaded page config overrides from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed #{} block: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = PageConfig::default();
        assert_eq!(config.selectors.nav, ".navbar");
        assert_eq!(config.selectors.to_top, "a.to-top");
        assert_eq!(config.active_class, "active");
        assert_eq!(config.popup_delay_ms, 2_000);
        assert_eq!(config.scroll_threshold_px, 100.0);
        assert_eq!(config.blur_filter, "blur(2px)");
    }

    #[test]
    fn default_submit_message() {
        assert_eq!(
            PageConfig::default().submit_message,
            "Your form has been submitted successfully"
        );
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r##"{ "popup_delay_ms": 500, "selectors": { "form": "#contact" } }"##,
        )
        .unwrap();

        assert_eq!(config.popup_delay_ms, 500);
        assert_eq!(config.selectors.form, "#contact");
        assert_eq!(config.selectors.popup, ".popup");
        assert_eq!(config.scroll_threshold_px, 100.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(PageConfig::from_json("{ popup_delay_ms: }").is_err());
        assert!(PageConfig::from_json(r#"{ "popup_delay_ms": "soon" }"#).is_err());
    }
}
