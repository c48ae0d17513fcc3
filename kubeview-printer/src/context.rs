use tokio_util::sync::CancellationToken;

use crate::error::PrintError;

/// Request-scoped context handed down every render call chain.
///
/// The printing core never inspects it; it is forwarded unchanged to each
/// collaborator, which decides when to observe cancellation.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    cancel: CancellationToken,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Child context cancelled together with this one.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn check_cancelled(&self) -> Result<(), PrintError> {
        if self.is_cancelled() {
            return Err(PrintError::Cancelled);
        }
        Ok(())
    }
}
