use std::fmt::{self, Display};

use crate::{Pid, Time};

/// Why a batch was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The batch has no processes.
    Empty,

    /// A process asks for no CPU time at all.
    ZeroBurst(Pid),
}

impl Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Empty => write!(f, "the batch has no processes"),
            BatchError::ZeroBurst(pid) => write!(f, "process {} has a burst time of 0", pid),
        }
    }
}

/// Errors reported by the library.
///
/// The first three are raised before a simulation starts. The last two
/// can only come from a [`crate::Scheduler`] that breaks its contract,
/// the built-in policies never produce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidBatch(BatchError),

    /// Round Robin needs a positive time quantum.
    InvalidQuantum(usize),

    /// The policy identifier is not one of the six known policies.
    UnknownPolicy(String),

    /// The scheduler returned `Done` while `pending` still had work left.
    Unfinished { time: Time, pending: Vec<Pid> },

    /// The scheduler's decision would not move the run forward: a `Run`
    /// for a completed process (`pid` is set), or `Idle` while a process
    /// is ready (`pid` is `None`).
    Stalled { time: Time, pid: Option<Pid> },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBatch(reason) => write!(f, "invalid batch: {}", reason),
            Error::InvalidQuantum(quantum) => {
                write!(f, "invalid time quantum {}, it must be positive", quantum)
            }
            Error::UnknownPolicy(name) => write!(f, "unknown scheduling policy `{}`", name),
            Error::Unfinished { time, pending } => {
                let pending = pending
                    .iter()
                    .map(|pid| format!("P{}", pid))
                    .collect::<Vec<_>>();
                write!(
                    f,
                    "scheduler finished at t={} with unfinished processes {}",
                    time,
                    pending.join(", ")
                )
            }
            Error::Stalled {
                time,
                pid: Some(pid),
            } => write!(f, "scheduler picked completed process P{} at t={}", pid, time),
            Error::Stalled { time, pid: None } => {
                write!(f, "scheduler idled at t={} while a process was ready", time)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<BatchError> for Error {
    fn from(reason: BatchError) -> Self {
        Error::InvalidBatch(reason)
    }
}
