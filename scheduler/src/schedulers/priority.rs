use std::num::NonZeroUsize;

use crate::{Registry, Scheduler, SchedulingDecision, Time};

/// Priority scheduling, lower value first.
///
/// The preemptive variant re-decides after every time unit. The
/// non-preemptive one lets the chosen process finish its burst.
pub struct Priority {
    timeslice: Option<NonZeroUsize>,
}

impl Priority {
    pub fn non_preemptive() -> Self {
        Priority { timeslice: None }
    }

    pub fn preemptive() -> Self {
        Priority {
            timeslice: Some(NonZeroUsize::MIN),
        }
    }
}

impl Scheduler for Priority {
    fn next(&mut self, now: Time, registry: &Registry) -> SchedulingDecision {
        let picked = super::pick(now, registry, |process, _| process.priority);
        super::decide(now, registry, picked, self.timeslice)
    }
}
