//! A processor simulation library
//!
//! This is used for simulating the schedulers from the [`scheduler`] crate
//! on a batch of processes, one run per policy.

use std::fmt::{self, Display};

use log::{debug, error, info};
use scheduler::{
    Batch, Error, Pid, Policy, Registry, Scheduler, SchedulingDecision, StopReason, Time,
};

mod gantt;
mod report;

pub use gantt::{Gantt, Segment};
pub use report::{ProcessMetrics, Report};

/// Running iteration log
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Log {
    /// The clock value when the decision was taken.
    pub time: Time,

    /// The action requested by the scheduler.
    pub decision: SchedulingDecision,

    /// Why the process stopped, for [`SchedulingDecision::Run`].
    pub stop_reason: Option<StopReason>,
}

impl Log {
    fn new(time: Time, decision: SchedulingDecision, stop_reason: Option<StopReason>) -> Log {
        Log {
            time,
            decision,
            stop_reason,
        }
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "t={}: {}", self.time, self.decision)?;
        if let Some(reason) = self.stop_reason {
            writeln!(f, "-> {}", reason)?;
        }
        Ok(())
    }
}

/// The processor simulator.
///
/// Owns the per-run [`Registry`], so no two runs can share process state.
pub struct Processor<'a, S: Scheduler> {
    scheduler: S,
    registry: Registry<'a>,
    gantt: Gantt,
    logs: Vec<Log>,
    now: Time,
}

impl<'a, S: Scheduler> Processor<'a, S> {
    /// Simulates `batch` under `scheduler` until every process completes.
    ///
    /// The run only ends once every process has completed. A scheduler that
    /// returns `Done` before that, or whose decision would not advance the
    /// run, yields an [`Error::Unfinished`] or [`Error::Stalled`] instead of
    /// a report.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::Batch;
    /// use std::num::NonZeroUsize;
    ///
    /// let batch = Batch::without_priorities([(0, 5), (0, 3), (0, 2)]).unwrap();
    /// let report =
    ///     Processor::run(&batch, scheduler::round_robin(NonZeroUsize::new(2).unwrap())).unwrap();
    ///
    /// assert_eq!(report.completions(), vec![10, 9, 6]);
    /// ```
    pub fn run(batch: &'a Batch, scheduler: S) -> Result<Report, Error> {
        let mut processor = Processor {
            scheduler,
            registry: Registry::new(batch),
            gantt: Gantt::new(),
            logs: vec![],
            now: 0,
        };

        info!(
            "simulating {} processes, {} units of work",
            batch.len(),
            batch.total_burst()
        );
        while !processor.registry.all_completed() {
            processor.step()?;
        }

        processor.gantt.finalize(processor.now);
        info!(
            "finished at t={} after {} decisions",
            processor.now,
            processor.logs.len()
        );
        Report::new(&processor.registry, processor.gantt, processor.logs)
    }

    /// Asks the scheduler for one decision and acts on it.
    fn step(&mut self) -> Result<(), Error> {
        let decision = self.scheduler.next(self.now, &self.registry);
        match decision {
            SchedulingDecision::Run { pid, timeslice } => {
                self.execute(pid, timeslice.get(), decision)
            }
            SchedulingDecision::Idle => {
                if self.registry.ready(self.now).next().is_some() {
                    return Err(self.stalled(None));
                }
                debug!("t={} idle", self.now);
                let idle_already = matches!(
                    self.logs.last(),
                    Some(Log {
                        decision: SchedulingDecision::Idle,
                        ..
                    })
                );
                if !idle_already {
                    self.logs.push(Log::new(self.now, decision, None));
                }
                self.now += 1;
                Ok(())
            }
            SchedulingDecision::Done => {
                let pending = self
                    .registry
                    .states()
                    .filter(|(_, state)| !state.is_completed())
                    .map(|(process, _)| process.pid)
                    .collect();
                let err = Error::Unfinished {
                    time: self.now,
                    pending,
                };
                error!("{}", err);
                Err(err)
            }
        }
    }

    fn execute(
        &mut self,
        pid: Pid,
        timeslice: Time,
        decision: SchedulingDecision,
    ) -> Result<(), Error> {
        if self.registry.state(pid).is_completed() {
            return Err(self.stalled(Some(pid)));
        }

        let start = self.now;
        let used = self.registry.execute(pid, start, timeslice);
        self.now += used;
        self.gantt.record(pid, start, self.now);

        let reason = if self.registry.state(pid).is_completed() {
            StopReason::Completed
        } else {
            StopReason::Expired
        };
        debug!("t={} ran P{} until t={}: {}", start, pid, self.now, reason);

        self.scheduler.stop(self.now, &self.registry, pid, reason);
        self.logs.push(Log::new(start, decision, Some(reason)));
        Ok(())
    }

    fn stalled(&self, pid: Option<Pid>) -> Error {
        let err = Error::Stalled {
            time: self.now,
            pid,
        };
        error!("{}", err);
        err
    }
}

/// Simulates `batch` under `policy`.
///
/// * `quantum` - the Round Robin time quantum, ignored by the other policies.
///
/// Each call starts from fresh process state, so simulating the same batch
/// twice yields identical reports.
pub fn simulate(batch: &Batch, policy: Policy, quantum: Option<usize>) -> Result<Report, Error> {
    let scheduler = policy.scheduler(quantum)?;
    info!("running {}", policy);

    let mut report = Processor::run(batch, scheduler)?;
    report.policy = Some(policy);
    Ok(report)
}

/// Format a [`Report`]'s decision logs to a [`String`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_logs, simulate};
/// use scheduler::{Batch, Policy};
///
/// let batch = Batch::without_priorities([(0, 2)]).unwrap();
/// let report = simulate(&batch, Policy::Fcfs, None).unwrap();
///
/// println!("{}", format_logs(&report.logs));
/// ```
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for (iteration, log) in logs.iter().enumerate() {
        let _ = fmt::write(
            &mut s,
            format_args!("===== Iteration: {} =====\n{}\n", iteration + 1, log),
        );
    }
    s
}

/// Format a list of reports, one block per policy.
pub fn format_reports(reports: &[Report]) -> String {
    reports
        .iter()
        .map(|report| report.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
