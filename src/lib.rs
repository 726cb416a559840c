//! Interactive behavior for the static marketing site: mobile navigation,
//! smooth in-page scrolling, loader dismissal, the welcome popup, the contact
//! form acknowledgment and the scroll-to-top control.

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod host;
pub mod lifecycle;

pub mod behaviors {
    pub mod anchors;
    pub mod form;
    pub mod loader;
    pub mod nav;
    pub mod popup;
    pub mod to_top;
}

use controller::PageController;

pub fn start() {
    match PageController::from_window() {
        Ok(controller) => {
            let report = controller.install();
            log::info!(
                "Page interactions ready ({} behaviors skipped)",
                report.failures().len()
            );
        }
        Err(e) => log::error!("Page interactions unavailable: {}", e),
    }
}
