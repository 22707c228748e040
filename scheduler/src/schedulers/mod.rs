//! The scheduling policies.
//!
//! Every policy lives in its own file and is exported here. The ranking
//! policies share [`pick`]: among the processes that have arrived and still
//! need CPU time, the one with the smallest `(key, arrival, pid)` wins.

use std::num::NonZeroUsize;

use crate::{Pid, ProcessDescriptor, ProcessState, Registry, SchedulingDecision, Time};

mod fcfs;
pub use fcfs::Fcfs;

mod sjf;
pub use sjf::Sjf;

mod srtf;
pub use srtf::Srtf;

mod priority;
pub use priority::Priority;

mod round_robin;
pub use round_robin::RoundRobin;

fn pick<K, F>(now: Time, registry: &Registry, key: F) -> Option<(Pid, Time)>
where
    K: Ord,
    F: Fn(&ProcessDescriptor, &ProcessState) -> K,
{
    registry
        .ready(now)
        .min_by_key(|&(process, state)| (key(process, state), process.arrival, process.pid))
        .map(|(process, state)| (process.pid, state.remaining))
}

/// Turns the outcome of a pick into a decision.
///
/// `timeslice` of `None` runs the picked process to completion.
fn decide(
    now: Time,
    registry: &Registry,
    picked: Option<(Pid, Time)>,
    timeslice: Option<NonZeroUsize>,
) -> SchedulingDecision {
    let Some((pid, remaining)) = picked else {
        return idle_or_done(registry);
    };

    let timeslice = match (timeslice, NonZeroUsize::new(remaining)) {
        (Some(slice), Some(remaining)) => slice.min(remaining),
        (None, Some(remaining)) => remaining,
        (_, None) => return idle_or_done(registry),
    };
    log::trace!("t={} picked P{} for {}", now, pid, timeslice);

    SchedulingDecision::Run { pid, timeslice }
}

fn idle_or_done(registry: &Registry) -> SchedulingDecision {
    if registry.all_completed() {
        SchedulingDecision::Done
    } else {
        SchedulingDecision::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Batch;

    #[test]
    fn ties_fall_back_to_arrival_then_pid() {
        let batch = Batch::new([(2, 4, 1), (1, 4, 1), (1, 4, 1)]).unwrap();
        let registry = Registry::new(&batch);

        let picked = pick(5, &registry, |process, _| process.burst);
        assert_eq!(picked, Some((Pid::new(2), 4)));
    }

    #[test]
    fn nothing_ready_is_idle() {
        let batch = Batch::without_priorities([(3, 1)]).unwrap();
        let registry = Registry::new(&batch);

        let picked = pick(0, &registry, |process, _| process.burst);
        assert_eq!(decide(0, &registry, picked, None), SchedulingDecision::Idle);
    }

    #[test]
    fn everything_completed_is_done() {
        let batch = Batch::without_priorities([(0, 1)]).unwrap();
        let mut registry = Registry::new(&batch);
        registry.execute(Pid::new(1), 0, 1);

        let picked = pick(1, &registry, |process, _| process.burst);
        assert_eq!(decide(1, &registry, picked, None), SchedulingDecision::Done);
    }
}
