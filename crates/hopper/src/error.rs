use simclient::SimError;
use thiserror::Error;

/// Errors surfaced by the environment adapter.
///
/// Nothing here is retried internally: construction-time failures are fatal,
/// precondition violations are rejected before the simulator is touched, and
/// transport faults propagate to the caller, who decides whether to
/// `reset()` and continue.
#[derive(Error, Debug)]
pub enum EnvError {
    /// A configured scene object could not be resolved at construction.
    #[error("scene object `{name}` could not be resolved")]
    UnresolvedObject {
        name: String,
        #[source]
        source: SimError,
    },
    /// The adapter was constructed with an unusable configuration.
    #[error("invalid configuration: {0}")]
    Configuration(&'static str),
    /// The action failed validation; the simulator was not contacted.
    #[error("invalid action: {0}")]
    InvalidAction(String),
    /// `step` was called while no episode is running.
    #[error("step called before reset")]
    EpisodeNotStarted,
    /// A simulator round-trip failed mid-episode.
    #[error(transparent)]
    Sim(#[from] SimError),
}
