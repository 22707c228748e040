//! A CPU scheduling library.
//!
//! This library provides the process model, the per-run registry and the
//! policies that decide which process the simulated CPU runs next.
//!

use std::num::NonZeroUsize;

mod error;
mod policy;
mod registry;
mod scheduler;

pub use crate::error::{BatchError, Error};
pub use crate::policy::Policy;
pub use crate::registry::{Batch, Registry};
pub use crate::scheduler::{
    Pid, ProcessDescriptor, ProcessState, Scheduler, SchedulingDecision, StopReason, Time,
};

pub mod schedulers;

use schedulers::{Fcfs, Priority, RoundRobin, Sjf, Srtf};

/// Returns a first come, first served scheduler.
pub fn fcfs() -> impl Scheduler {
    Fcfs
}

/// Returns a non-preemptive shortest job first scheduler.
pub fn sjf() -> impl Scheduler {
    Sjf
}

/// Returns a shortest remaining time first scheduler, re-deciding every time unit.
pub fn srtf() -> impl Scheduler {
    Srtf
}

/// Returns a non-preemptive priority scheduler. Lower values run first.
pub fn priority() -> impl Scheduler {
    Priority::non_preemptive()
}

/// Returns a preemptive priority scheduler, re-deciding every time unit.
pub fn priority_preemptive() -> impl Scheduler {
    Priority::preemptive()
}

/// Returns a round robin scheduler
///
/// * `timeslice` - the time quantum a process can run before it goes back
///                 to the tail of the ready queue.
pub fn round_robin(timeslice: NonZeroUsize) -> impl Scheduler {
    RoundRobin::new(timeslice)
}
