//! Load state machine for a single collection view.

/// Why fallback content is being shown.
///
/// The default view behaviour treats both the same way; the distinction is
/// kept so consumers can opt into showing an error or an empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The remote call failed.
    Error {
        /// Human-readable message from the backend error
        message: String,
    },
    /// The remote call succeeded but returned no rows.
    Empty,
}

/// Lifecycle of one collection load.
///
/// `Idle → Loading → Ready | Failed`. `Failed` still carries a non-empty
/// fallback list, so both terminal states render something.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Live data from the backend, in backend order.
    Ready(Vec<T>),
    /// Static fallback data substituted for the live result.
    Failed {
        reason: FallbackReason,
        fallback: Vec<T>,
    },
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once a terminal state has been reached.
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed { .. })
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub const fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Items a view should render: live items, fallback items, or nothing.
    pub fn visible_items(&self) -> &[T] {
        match self {
            Self::Ready(items) | Self::Failed { fallback: items, .. } => items,
            Self::Idle | Self::Loading => &[],
        }
    }

    /// Mutable access to whichever list is currently visible.
    pub fn visible_items_mut(&mut self) -> Option<&mut Vec<T>> {
        match self {
            Self::Ready(items) | Self::Failed { fallback: items, .. } => Some(items),
            Self::Idle | Self::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: LoadState<u8> = LoadState::default();
        assert_eq!(state, LoadState::Idle);
        assert!(!state.is_settled());
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn test_visible_items_covers_both_terminal_states() {
        let ready = LoadState::Ready(vec![1, 2]);
        let failed = LoadState::Failed {
            reason: FallbackReason::Empty,
            fallback: vec![9],
        };

        assert_eq!(ready.visible_items(), &[1, 2]);
        assert_eq!(failed.visible_items(), &[9]);
        assert!(failed.is_fallback());
        assert_eq!(failed.fallback_reason(), Some(&FallbackReason::Empty));
        assert!(ready.fallback_reason().is_none());
    }

    #[test]
    fn test_loading_has_no_mutable_items() {
        let mut state: LoadState<u8> = LoadState::Loading;
        assert!(state.is_loading());
        assert!(state.visible_items_mut().is_none());
    }
}
