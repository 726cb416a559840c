use std::rc::Rc;

use web_sys::{Document, Window};

use crate::behaviors::nav::NavMenu;
use crate::behaviors::{anchors, form, loader, nav, popup, to_top};
use crate::config::PageConfig;
use crate::error::SetupError;
use crate::host::{Host, WindowHost};
use crate::lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Navigation,
    SmoothScroll,
    Loader,
    Popup,
    FormAcknowledgment,
    ScrollToTop,
}

#[derive(Debug, Default)]
pub struct InstallReport {
    outcomes: Vec<(Behavior, Result<(), SetupError>)>,
}

impl InstallReport {
    fn record(&mut self, behavior: Behavior, outcome: Result<(), SetupError>) {
        match &outcome {
            Ok(()) => log::debug!("Installed {:?}", behavior),
            Err(e) => log::warn!("Skipping {:?}: {}", behavior, e),
        }
        self.outcomes.push((behavior, outcome));
    }

    pub fn outcome(&self, behavior: Behavior) -> Option<&Result<(), SetupError>> {
        self.outcomes
            .iter()
            .find(|(b, _)| *b == behavior)
            .map(|(_, outcome)| outcome)
    }

    pub fn failures(&self) -> Vec<(Behavior, &SetupError)> {
        self.outcomes
            .iter()
            .filter_map(|(b, outcome)| outcome.as_ref().err().map(|e| (*b, e)))
            .collect()
    }
}

/// Owns the element lookups for one page. Every behavior is installed
/// independently; one missing element never blocks the rest.
pub struct PageController<H: Host> {
    window: Window,
    document: Document,
    config: PageConfig,
    host: Rc<H>,
}

impl PageController<WindowHost> {
    pub fn from_window() -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let config = PageConfig::from_document(&document);
        let host = Rc::new(WindowHost::new(window.clone()));
        Ok(Self::new(window, document, config, host))
    }
}

impl<H: Host + 'static> PageController<H> {
    pub fn new(window: Window, document: Document, config: PageConfig, host: Rc<H>) -> Self {
        Self {
            window,
            document,
            config,
            host,
        }
    }

    pub fn install(&self) -> InstallReport {
        let mut report = InstallReport::default();
        let (window, document, config) = (&self.window, &self.document, &self.config);

        let menu = match NavMenu::find(document, config) {
            Ok(menu) => {
                report.record(Behavior::Navigation, nav::attach(document, config, &menu));
                Some(menu)
            }
            Err(e) => {
                report.record(Behavior::Navigation, Err(e));
                None
            }
        };

        report.record(
            Behavior::SmoothScroll,
            anchors::attach(document, config, menu)
                .map(|count| log::debug!("Bound {} fragment anchors", count)),
        );
        report.record(Behavior::Loader, loader::attach(window, document, config));
        report.record(
            Behavior::Popup,
            popup::attach(window, document, config).map(|_| ()),
        );
        report.record(
            Behavior::FormAcknowledgment,
            form::attach(document, config, self.host.clone()),
        );

        let to_top_outcome = if document.ready_state() == "loading" {
            let window = window.clone();
            let document = document.clone();
            let config = config.clone();
            let host = self.host.clone();
            lifecycle::on_dom_ready(&self.document, move || {
                match to_top::attach(&window, &document, &config, host) {
                    Ok(true) => log::debug!("Installed scroll-to-top control"),
                    Ok(false) => {}
                    Err(e) => log::warn!("Skipping {:?}: {}", Behavior::ScrollToTop, e),
                }
            })
        } else {
            to_top::attach(window, document, config, self.host.clone()).map(|_| ())
        };
        report.record(Behavior::ScrollToTop, to_top_outcome);

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_lists_only_errors() {
        let mut report = InstallReport::default();
        report.record(Behavior::Navigation, Ok(()));
        report.record(
            Behavior::Loader,
            Err(SetupError::MissingElement("#preloader".to_string())),
        );
        report.record(Behavior::Popup, Ok(()));

        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Behavior::Loader);
        assert_eq!(report.outcome(Behavior::Popup), Some(&Ok(())));
        assert_eq!(report.outcome(Behavior::ScrollToTop), None);
    }
}
