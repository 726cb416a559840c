use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Open,
    Closed,
}

impl NavState {
    pub fn toggled(self) -> Self {
        match self {
            NavState::Open => NavState::Closed,
            NavState::Closed => NavState::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == NavState::Open
    }
}

/// The collapsible navigation panel. The state lives here and is projected
/// onto the marker class after every change.
pub struct NavMenu {
    element: Element,
    active_class: String,
    state: Cell<NavState>,
}

impl NavMenu {
    pub fn new(element: Element, active_class: &str) -> Self {
        let state = if element.class_list().contains(active_class) {
            NavState::Open
        } else {
            NavState::Closed
        };

        Self {
            element,
            active_class: active_class.to_string(),
            state: Cell::new(state),
        }
    }

    pub fn find(document: &Document, config: &PageConfig) -> Result<Rc<Self>, SetupError> {
        let element = dom::require(document, &config.selectors.nav)?;
        Ok(Rc::new(Self::new(element, &config.active_class)))
    }

    pub fn state(&self) -> NavState {
        self.state.get()
    }

    pub fn toggle(&self) {
        self.set(self.state().toggled());
    }

    pub fn close(&self) {
        self.set(NavState::Closed);
    }

    fn set(&self, state: NavState) {
        self.state.set(state);
        dom::set_class(&self.element, &self.active_class, state.is_open());
    }
}

/// Binds the toggle control to an already located menu.
pub fn attach(
    document: &Document,
    config: &PageConfig,
    nav: &Rc<NavMenu>,
) -> Result<(), SetupError> {
    let toggle = dom::require(document, &config.selectors.nav_toggle)?;
    let nav = nav.clone();
    dom::listen(&toggle, "click", move |e| {
        e.prevent_default();
        nav.toggle();
        log::debug!("Navigation {:?}", nav.state());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_state() {
        for start in [NavState::Open, NavState::Closed] {
            assert_eq!(start.toggled().toggled(), start);
            assert_ne!(start.toggled(), start);
        }
    }

    #[test]
    fn only_open_is_open() {
        assert!(NavState::Open.is_open());
        assert!(!NavState::Closed.is_open());
    }
}
