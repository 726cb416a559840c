use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::error::js_message;

/// Window-level side effects the behaviors need.
pub trait Host {
    fn scroll_y(&self) -> f64;
    fn scroll_to_top(&self);
    fn alert(&self, message: &str);
    fn reload(&self);
}

pub struct WindowHost {
    window: Window,
}

impl WindowHost {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Host for WindowHost {
    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(e) => {
                log::error!("Failed to read scroll offset: {}", js_message(&e));
                0.0
            }
        }
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("Failed to show alert: {}", js_message(&e));
        }
    }

    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::error!("Failed to reload page: {}", js_message(&e));
        }
    }
}
