use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    NoWindow,
    NoDocument,
    MissingElement(String),
    InvalidSelector(String),
    WrongElementType(String),
    Listener { event: String, message: String },
}

impl SetupError {
    pub fn listener(event: &str, err: JsValue) -> Self {
        SetupError::Listener {
            event: event.to_string(),
            message: js_message(&err),
        }
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "No global window available"),
            SetupError::NoDocument => write!(f, "Window has no document"),
            SetupError::MissingElement(selector) => write!(f, "No element matches '{}'", selector),
            SetupError::InvalidSelector(selector) => write!(f, "Invalid selector '{}'", selector),
            SetupError::WrongElementType(selector) => {
                write!(f, "Element '{}' is not an HTML element", selector)
            }
            SetupError::Listener { event, message } => {
                write!(f, "Failed to attach '{}' listener: {}", event, message)
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Best-effort text for an exception thrown across the JS boundary.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_selector() {
        let err = SetupError::MissingElement("#preloader".to_string());
        assert_eq!(err.to_string(), "No element matches '#preloader'");

        let err = SetupError::Listener {
            event: "submit".to_string(),
            message: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to attach 'submit' listener: denied");
    }
}
