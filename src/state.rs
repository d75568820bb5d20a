/// Explicit UI states for the popup controls

/// The generate button is either waiting for a click or holding a request
/// in flight. A click while `Pending` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Pending,
}

impl ButtonState {
    pub fn label(self) -> &'static str {
        match self {
            ButtonState::Idle => "Create Link",
            ButtonState::Pending => "Generating...",
        }
    }

    pub fn is_pending(self) -> bool {
        self == ButtonState::Pending
    }
}

/// Visual flags of the link holder container. `loaded` sticks once a link
/// arrives; `copied` is transient copy feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolderState {
    pub loaded: bool,
    pub copied: bool,
}

impl HolderState {
    /// Class list the stylesheet keys off: `linkHolder [loaded] [copied]`
    pub fn class_list(self) -> String {
        let mut classes = String::from("linkHolder");
        if self.loaded {
            classes.push_str(" loaded");
        }
        if self.copied {
            classes.push_str(" copied");
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_labels() {
        assert_eq!(ButtonState::Idle.label(), "Create Link");
        assert_eq!(ButtonState::Pending.label(), "Generating...");
    }

    #[test]
    fn test_only_pending_blocks() {
        assert!(!ButtonState::Idle.is_pending());
        assert!(ButtonState::Pending.is_pending());
    }

    #[test]
    fn test_holder_class_list() {
        assert_eq!(HolderState::default().class_list(), "linkHolder");
        assert_eq!(
            HolderState {
                loaded: true,
                copied: false
            }
            .class_list(),
            "linkHolder loaded"
        );
        assert_eq!(
            HolderState {
                loaded: true,
                copied: true
            }
            .class_list(),
            "linkHolder loaded copied"
        );
        assert_eq!(
            HolderState {
                loaded: false,
                copied: true
            }
            .class_list(),
            "linkHolder copied"
        );
    }
}
