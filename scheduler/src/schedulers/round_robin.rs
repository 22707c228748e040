use std::collections::{HashSet, VecDeque};
use std::num::NonZeroUsize;

use crate::SchedulingDecision::Run;
use crate::{Pid, Registry, Scheduler, SchedulingDecision, StopReason, Time};

/// Round robin over a FIFO ready queue.
///
/// A process is admitted to the queue once, when it has arrived. After a
/// slice expires, the processes that arrived during that slice are queued
/// before the expired process goes back to the tail.
pub struct RoundRobin {
    ready_queue: VecDeque<Pid>,
    admitted: HashSet<Pid>,
    timeslice: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(timeslice: NonZeroUsize) -> Self {
        RoundRobin {
            ready_queue: VecDeque::new(),
            admitted: HashSet::new(),
            timeslice,
        }
    }

    /// Queues every process that arrived by `now` and was never queued,
    /// ordered by arrival then PID.
    fn admit(&mut self, now: Time, registry: &Registry) {
        let mut arrived = registry
            .ready(now)
            .map(|(process, _)| process)
            .filter(|process| !self.admitted.contains(&process.pid))
            .collect::<Vec<_>>();
        arrived.sort_by_key(|process| (process.arrival, process.pid));

        for process in arrived {
            self.admitted.insert(process.pid);
            self.ready_queue.push_back(process.pid);
        }
    }
}

impl Scheduler for RoundRobin {
    fn next(&mut self, now: Time, registry: &Registry) -> SchedulingDecision {
        self.admit(now, registry);

        while let Some(pid) = self.ready_queue.pop_front() {
            let Some(remaining) = NonZeroUsize::new(registry.state(pid).remaining) else {
                continue;
            };
            let timeslice = self.timeslice.min(remaining);
            log::trace!("t={} dequeued P{} for {}, queue {:?}", now, pid, timeslice, self.ready_queue);
            return Run { pid, timeslice };
        }

        super::idle_or_done(registry)
    }

    fn stop(&mut self, now: Time, registry: &Registry, pid: Pid, reason: StopReason) {
        self.admit(now, registry);

        if reason == StopReason::Expired {
            self.ready_queue.push_back(pid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Batch;

    fn run(scheduler: &mut RoundRobin, registry: &mut Registry, now: Time) -> (Pid, Time) {
        let Run { pid, timeslice } = scheduler.next(now, registry) else {
            panic!("expected a process to run at {now}");
        };
        let used = registry.execute(pid, now, timeslice.get());
        let reason = if registry.state(pid).is_completed() {
            StopReason::Completed
        } else {
            StopReason::Expired
        };
        scheduler.stop(now + used, registry, pid, reason);
        (pid, now + used)
    }

    #[test]
    fn arrivals_go_before_the_expired_process() {
        let batch = Batch::without_priorities([(0, 4), (2, 2)]).unwrap();
        let mut registry = Registry::new(&batch);
        let mut scheduler = RoundRobin::new(NonZeroUsize::new(2).unwrap());

        let (first, now) = run(&mut scheduler, &mut registry, 0);
        assert_eq!(first, Pid::new(1));
        assert_eq!(
            scheduler.ready_queue.iter().copied().collect::<Vec<_>>(),
            vec![Pid::new(2), Pid::new(1)]
        );

        let (second, _) = run(&mut scheduler, &mut registry, now);
        assert_eq!(second, Pid::new(2));
    }

    #[test]
    fn completed_processes_leave_the_queue() {
        let batch = Batch::without_priorities([(0, 1), (0, 3)]).unwrap();
        let mut registry = Registry::new(&batch);
        let mut scheduler = RoundRobin::new(NonZeroUsize::new(2).unwrap());

        let (pid, now) = run(&mut scheduler, &mut registry, 0);
        assert_eq!((pid, now), (Pid::new(1), 1));
        assert_eq!(
            scheduler.ready_queue.iter().copied().collect::<Vec<_>>(),
            vec![Pid::new(2)]
        );
    }

    #[test]
    fn empty_queue_waits_for_arrivals() {
        let batch = Batch::without_priorities([(3, 1)]).unwrap();
        let registry = Registry::new(&batch);
        let mut scheduler = RoundRobin::new(NonZeroUsize::new(2).unwrap());

        assert_eq!(scheduler.next(0, &registry), SchedulingDecision::Idle);
    }
}
