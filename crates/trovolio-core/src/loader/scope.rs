//! Lifetime of the view that owns a load.

use tokio_util::sync::CancellationToken;

/// Marks the lifetime of a mounted view.
///
/// Work spawned on behalf of the view holds a child of this scope's token
/// and must not touch view state once the scope is torn down. Dropping the
/// scope tears it down.
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until `teardown` is called or the scope is dropped.
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Tear the view down. Idempotent.
    pub fn teardown(&self) {
        self.token.cancel();
    }

    /// Token handed to work spawned for this view.
    pub fn token(&self) -> CancellationToken {
        self.token.child_token()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teardown_cancels_child_tokens() {
        let scope = ViewScope::new();
        let token = scope.token();
        assert!(scope.is_active());

        scope.teardown();
        assert!(!scope.is_active());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_drop_cancels_child_tokens() {
        let scope = ViewScope::new();
        let token = scope.token();
        drop(scope);
        assert!(token.is_cancelled());
    }
}
