use std::rc::Rc;

use web_sys::Document;

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::host::Host;

/// Nothing is sent anywhere: the visitor gets a success message and the page
/// starts over. Stand-in until the site has a real submission endpoint.
pub fn acknowledge<H: Host>(host: &H, message: &str) {
    host.alert(message);
    host.reload();
}

pub fn attach<H: Host + 'static>(
    document: &Document,
    config: &PageConfig,
    host: Rc<H>,
) -> Result<(), SetupError> {
    let form = dom::require(document, &config.selectors.form)?;
    let message = config.submit_message.clone();
    dom::listen(&form, "submit", move |e| {
        e.prevent_default();
        log::info!("Form submitted, acknowledging and reloading");
        acknowledge(host.as_ref(), &message);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl Host for Recorder {
        fn scroll_y(&self) -> f64 {
            0.0
        }
        fn scroll_to_top(&self) {
            self.calls.borrow_mut().push("scroll_to_top".to_string());
        }
        fn alert(&self, message: &str) {
            self.calls.borrow_mut().push(format!("alert:{}", message));
        }
        fn reload(&self) {
            self.calls.borrow_mut().push("reload".to_string());
        }
    }

    #[test]
    fn alerts_then_reloads() {
        let host = Recorder::default();
        acknowledge(&host, "thanks");
        assert_eq!(*host.calls.borrow(), vec!["alert:thanks", "reload"]);
    }
}
