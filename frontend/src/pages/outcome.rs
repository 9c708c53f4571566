use crate::api::ApiError;

/// How a row-level action flow ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The user closed or declined a prompt.
    Declined,
    /// Preconditions failed; nothing was sent.
    Skipped,
    Applied { message: String },
    Failed(ApiError),
    /// The row went away before the flow finished.
    Abandoned,
}
