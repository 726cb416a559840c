use std::borrow::Cow;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use super::nav::NavMenu;
use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;

/// Element id an in-page `href` points at, or `None` for a bare `#`,
/// non-fragment links and undecodable fragments.
pub fn fragment_target(href: &str) -> Option<Cow<'_, str>> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    urlencoding::decode(fragment).ok()
}

fn scroll_to_fragment(document: &Document, href: &str) {
    let Some(id) = fragment_target(href) else {
        log::debug!("Anchor '{}' has no scroll target", href);
        return;
    };
    let Some(target) = document.get_element_by_id(&id) else {
        log::debug!("No element with id '{}'", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Intercepts every fragment anchor: no jump, menu closed, smooth scroll.
/// Returns how many anchors were bound.
pub fn attach(
    document: &Document,
    config: &PageConfig,
    nav: Option<Rc<NavMenu>>,
) -> Result<usize, SetupError> {
    let anchors = dom::query_all(document, &config.selectors.fragment_anchors)?;

    for anchor in &anchors {
        let nav = nav.clone();
        let document = document.clone();
        dom::listen(anchor, "click", move |e| {
            e.prevent_default();
            if let Some(nav) = &nav {
                nav.close();
            }

            let href = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|anchor| anchor.get_attribute("href"));
            if let Some(href) = href {
                scroll_to_fragment(&document, &href);
            }
        })?;
    }

    Ok(anchors.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fragment() {
        assert_eq!(fragment_target("#about").as_deref(), Some("about"));
    }

    #[test]
    fn percent_encoded_fragment_is_decoded() {
        assert_eq!(fragment_target("#caf%C3%A9").as_deref(), Some("café"));
        assert_eq!(fragment_target("#our%20team").as_deref(), Some("our team"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(fragment_target("#"), None);
    }

    #[test]
    fn non_fragment_links_have_no_target() {
        assert_eq!(fragment_target("/pricing"), None);
        assert_eq!(fragment_target("https://example.com/#top"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn invalid_utf8_escape_has_no_target() {
        assert_eq!(fragment_target("#%FF"), None);
    }
}
