use crate::{Registry, Scheduler, SchedulingDecision, Time};

/// Non-preemptive shortest job first.
///
/// Among the arrived processes the one with the smallest burst time runs to
/// completion.
pub struct Sjf;

impl Scheduler for Sjf {
    fn next(&mut self, now: Time, registry: &Registry) -> SchedulingDecision {
        let picked = super::pick(now, registry, |process, _| process.burst);
        super::decide(now, registry, picked, None)
    }
}
