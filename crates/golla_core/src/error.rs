use thiserror::Error;

/// Errors raised by the randomized selection helpers.
///
/// These are caller mistakes: the UI is expected to validate inputs before
/// asking for a decision, so seeing one of these usually means a missed check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("invalid range: max ({max}) is below min ({min})")]
    InvalidRange { min: i64, max: i64 },

    #[error("cannot split {members} member(s) into {teams} team(s)")]
    InvalidTeamCount { teams: usize, members: usize },

    #[error("need at least {required} items, got {actual}")]
    TooFewItems { required: usize, actual: usize },
}
