//! Runtime error types.

/// Errors that can keep a session from starting. A running session has no
/// failure paths: scripts always answer, and effect application treats
/// missing takes and duplicate gives as no-ops.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The content catalogs failed to load or cross-validate. This is a
    /// configuration bug, fatal at startup.
    #[error("failed to load game content: {0}")]
    Content(#[from] anyhow::Error),
}
