use serde::{Deserialize, Serialize};

/// Coarse classification of a failed price source call.
///
/// Carried on a shard's failure marker so the presentation collaborator can
/// tell a slow shard from a broken one.
///
/// # Behavior Summary
///
/// | Kind | Scope when unified | Scope in fallback |
/// |------|--------------------|-------------------|
/// | `Timeout` | whole unified call, triggers fallback | that shard only |
/// | `Transport` | whole unified call, triggers fallback | that shard only |
/// | `MalformedResponse` | whole unified call, triggers fallback | that shard only |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The call exceeded its deadline.
    Timeout,

    /// Connection failed, was reset, or the source answered with a
    /// non-success status.
    Transport,

    /// The response arrived but did not decode into the expected shape.
    MalformedResponse,
}
