//! Modal state machine
//!
//! Closed -> Open on a resolvable open; Open -> Open replaces the content;
//! any close lands in Closed. The overlay's classes and ARIA attributes are
//! projections of this state and are never read back.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { content_id: String },
}

/// What an open did, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTransition {
    Opened,
    Replaced,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn content_id(&self) -> Option<&str> {
        match self {
            Self::Open { content_id } => Some(content_id),
            Self::Closed => None,
        }
    }

    pub fn open(&mut self, content_id: &str) -> OpenTransition {
        let transition = if self.is_open() {
            OpenTransition::Replaced
        } else {
            OpenTransition::Opened
        };
        *self = Self::Open {
            content_id: content_id.to_string(),
        };
        transition
    }

    /// Returns whether the modal was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }
}
