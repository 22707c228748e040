use std::fmt::{self, Display};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::schedulers::{Fcfs, Priority, RoundRobin, Sjf, Srtf};
use crate::{Error, Scheduler};

/// The closed set of scheduling policies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Policy {
    Fcfs,
    SjfNonPreemptive,
    SjfPreemptive,
    PriorityNonPreemptive,
    PriorityPreemptive,
    RoundRobin,
}

impl Policy {
    /// All policies, in menu order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::SjfNonPreemptive,
        Policy::SjfPreemptive,
        Policy::PriorityNonPreemptive,
        Policy::RoundRobin,
        Policy::PriorityPreemptive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::SjfNonPreemptive => "sjf",
            Policy::SjfPreemptive => "srtf",
            Policy::PriorityNonPreemptive => "priority",
            Policy::PriorityPreemptive => "priority-preemptive",
            Policy::RoundRobin => "round-robin",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Policy::SjfPreemptive | Policy::PriorityPreemptive | Policy::RoundRobin
        )
    }

    /// Whether the policy reads process priorities.
    pub fn uses_priority(&self) -> bool {
        matches!(
            self,
            Policy::PriorityNonPreemptive | Policy::PriorityPreemptive
        )
    }

    /// Builds a fresh scheduler for one run.
    ///
    /// * `quantum` - the Round Robin time quantum, ignored by every other policy.
    pub fn scheduler(&self, quantum: Option<usize>) -> Result<Box<dyn Scheduler>, Error> {
        let scheduler: Box<dyn Scheduler> = match self {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::SjfNonPreemptive => Box::new(Sjf),
            Policy::SjfPreemptive => Box::new(Srtf),
            Policy::PriorityNonPreemptive => Box::new(Priority::non_preemptive()),
            Policy::PriorityPreemptive => Box::new(Priority::preemptive()),
            Policy::RoundRobin => {
                let quantum = quantum.unwrap_or(0);
                let timeslice = NonZeroUsize::new(quantum).ok_or(Error::InvalidQuantum(quantum))?;
                Box::new(RoundRobin::new(timeslice))
            }
        };
        Ok(scheduler)
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Accepts the policy names, a few common aliases and the menu numbers 1 to 6.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let policy = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "fcfs" | "fifo" => Policy::Fcfs,
            "2" | "sjf" | "sjf-np" => Policy::SjfNonPreemptive,
            "3" | "srtf" | "sjf-p" => Policy::SjfPreemptive,
            "4" | "priority" | "priority-np" => Policy::PriorityNonPreemptive,
            "5" | "rr" | "round-robin" => Policy::RoundRobin,
            "6" | "priority-preemptive" | "priority-p" => Policy::PriorityPreemptive,
            _ => return Err(Error::UnknownPolicy(s.to_string())),
        };
        Ok(policy)
    }
}
