use std::fmt::{self, Display};
use std::num::NonZeroUsize;
use std::ops::Add;

use crate::Registry;

/// A point on the simulation clock, or an amount of CPU time.
pub type Time = usize;

/// The PID of a process
///
/// The PID cannot be 0, PIDs start from 1 and follow the input order.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(NonZeroUsize);

impl Pid {
    pub fn new(pid: usize) -> Pid {
        Pid(NonZeroUsize::new(pid).expect("PIDs start from 1"))
    }

    /// Position of the process inside its batch.
    pub fn index(&self) -> usize {
        self.0.get() - 1
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<usize> for Pid {
    type Output = Pid;

    fn add(self, rhs: usize) -> Self::Output {
        Pid::new(self.0.get() + rhs)
    }
}

/// The immutable description of a process, as given in the input batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessDescriptor {
    /// The PID, equal to the 1-based position in the batch.
    pub pid: Pid,

    /// The clock value at which the process becomes eligible to run.
    pub arrival: Time,

    /// The total CPU time the process needs.
    pub burst: Time,

    /// Lower value means higher priority. Only the priority policies read it.
    pub priority: i32,
}

/// The mutable part of a process, alive for exactly one simulation run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// CPU time still needed. Never increases, reaches 0 at completion.
    pub remaining: Time,

    /// Set exactly once, when `remaining` reaches 0.
    pub completion: Option<Time>,

    /// Clock value of the first dispatch.
    pub first_run: Option<Time>,
}

impl ProcessState {
    pub fn new(burst: Time) -> ProcessState {
        ProcessState {
            remaining: burst,
            completion: None,
            first_run: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.remaining == 0
    }
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.completion {
            Some(time) => write!(f, "DONE@{}", time),
            None => write!(f, "REMAINING {}", self.remaining),
        }
    }
}

/// The action that the scheduler asks the engine to take.
///
/// This is returned by the [`Scheduler::next`] function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulingDecision {
    /// Run the process with PID `pid` for a maximum of `timeslice` time units.
    Run { pid: Pid, timeslice: NonZeroUsize },

    /// No process is eligible, the CPU stays idle for one time unit.
    Idle,

    /// There are no more processes to schedule.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingDecision::Run { pid, timeslice } => {
                write!(f, "Run {} for {} slices", pid, timeslice)
            }
            SchedulingDecision::Idle => {
                write!(f, "Idle, no process has arrived")
            }
            SchedulingDecision::Done => {
                write!(f, "Done, no more processes")
            }
        }
    }
}

/// The reason the engine hands control back to the scheduler after a slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The timeslice ran out and the process still has work left.
    Expired,

    /// The process used up its remaining time.
    Completed,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Expired => write!(f, "Expired"),
            StopReason::Completed => write!(f, "Completed"),
        }
    }
}

/// The trait that any scheduling policy has to implement.
pub trait Scheduler {
    /// Returns the action that the engine has to perform at time `now`.
    fn next(&mut self, now: Time, registry: &Registry) -> SchedulingDecision;

    /// The scheduler is informed that `pid` stopped running at `now`,
    /// and why.
    fn stop(&mut self, now: Time, registry: &Registry, pid: Pid, reason: StopReason) {
        let _ = (now, registry, pid, reason);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn next(&mut self, now: Time, registry: &Registry) -> SchedulingDecision {
        (**self).next(now, registry)
    }

    fn stop(&mut self, now: Time, registry: &Registry, pid: Pid, reason: StopReason) {
        (**self).stop(now, registry, pid, reason)
    }
}
