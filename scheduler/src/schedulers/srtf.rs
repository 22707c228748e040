use std::num::NonZeroUsize;

use crate::{Registry, Scheduler, SchedulingDecision, Time};

/// Shortest remaining time first, the preemptive form of [`Sjf`](super::Sjf).
///
/// The decision is taken again after every time unit, so a newly arrived
/// process with strictly less remaining time takes the CPU right away.
pub struct Srtf;

impl Scheduler for Srtf {
    fn next(&mut self, now: Time, registry: &Registry) -> SchedulingDecision {
        let picked = super::pick(now, registry, |_, state| state.remaining);
        super::decide(now, registry, picked, Some(NonZeroUsize::MIN))
    }
}
