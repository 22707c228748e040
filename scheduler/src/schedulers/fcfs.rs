use crate::{Registry, Scheduler, SchedulingDecision, Time};

/// First come, first served.
///
/// The earliest arrival runs to completion; equal arrivals go by PID.
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn next(&mut self, now: Time, registry: &Registry) -> SchedulingDecision {
        let picked = super::pick(now, registry, |process, _| process.arrival);
        super::decide(now, registry, picked, None)
    }
}
