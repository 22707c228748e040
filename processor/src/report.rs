//! Per-process metrics and batch averages.

use std::fmt::{self, Display};

use scheduler::{Error, Pid, Policy, Registry, Time};

use crate::gantt::Gantt;
use crate::Log;

/// The metrics of one completed process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    pub priority: i32,

    /// The clock value when the remaining time reached 0.
    pub completion: Time,

    /// `completion - arrival`
    pub turnaround: Time,

    /// `turnaround - burst`, the time spent ready but not running.
    pub waiting: Time,

    /// Time between arrival and the first dispatch.
    pub response: Time,
}

impl Display for ProcessMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.pid,
            self.arrival,
            self.burst,
            self.completion,
            self.turnaround,
            self.waiting,
            self.response
        )
    }
}

/// The result of simulating one batch under one policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The policy that produced the report, when it was run through [`crate::simulate`].
    pub policy: Option<Policy>,

    /// One entry per process, in PID order.
    pub processes: Vec<ProcessMetrics>,

    pub gantt: Gantt,

    /// Every decision the engine acted on.
    pub logs: Vec<Log>,

    pub average_waiting: f64,
    pub average_turnaround: f64,
    pub average_response: f64,
}

impl Report {
    /// Collects the metrics once every process of the registry has completed.
    ///
    /// Fails with [`Error::Unfinished`] if some process never completed.
    pub(crate) fn new(registry: &Registry, gantt: Gantt, logs: Vec<Log>) -> Result<Report, Error> {
        let processes = registry
            .states()
            .map(|(process, state)| {
                let completion = state.completion?;
                let turnaround = completion - process.arrival;
                Some(ProcessMetrics {
                    pid: process.pid,
                    arrival: process.arrival,
                    burst: process.burst,
                    priority: process.priority,
                    completion,
                    turnaround,
                    waiting: turnaround - process.burst,
                    response: state.first_run? - process.arrival,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::Unfinished {
                time: gantt.end(),
                pending: registry
                    .states()
                    .filter(|(_, state)| !state.is_completed())
                    .map(|(process, _)| process.pid)
                    .collect(),
            })?;

        let count = processes.len() as f64;
        let mean = |total: Time| total as f64 / count;
        let average_waiting = mean(processes.iter().map(|process| process.waiting).sum());
        let average_turnaround = mean(processes.iter().map(|process| process.turnaround).sum());
        let average_response = mean(processes.iter().map(|process| process.response).sum());

        Ok(Report {
            policy: None,
            processes,
            gantt,
            logs,
            average_waiting,
            average_turnaround,
            average_response,
        })
    }

    pub fn completions(&self) -> Vec<Time> {
        self.processes.iter().map(|process| process.completion).collect()
    }

    pub fn turnarounds(&self) -> Vec<Time> {
        self.processes.iter().map(|process| process.turnaround).collect()
    }

    pub fn waitings(&self) -> Vec<Time> {
        self.processes.iter().map(|process| process.waiting).collect()
    }

    fn shows_priority(&self) -> bool {
        self.policy.map_or(false, |policy| policy.uses_priority())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(policy) = self.policy {
            writeln!(f, "===== {} =====", policy)?;
        }

        if self.shows_priority() {
            writeln!(f, "PID\tAT\tBT\tPR\tCT\tTAT\tWT\tRT")?;
            for process in &self.processes {
                writeln!(
                    f,
                    "P{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    process.pid,
                    process.arrival,
                    process.burst,
                    process.priority,
                    process.completion,
                    process.turnaround,
                    process.waiting,
                    process.response
                )?;
            }
        } else {
            writeln!(f, "PID\tAT\tBT\tCT\tTAT\tWT\tRT")?;
            for process in &self.processes {
                writeln!(f, "{}", process)?;
            }
        }

        writeln!(f, "Average WT={:.2}", self.average_waiting)?;
        writeln!(f, "Average TAT={:.2}", self.average_turnaround)?;
        writeln!(f, "Average RT={:.2}", self.average_response)?;
        writeln!(f)?;
        writeln!(f, "Gantt Chart:")?;
        write!(f, "{}", self.gantt)
    }
}
