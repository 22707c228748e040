use processor::{simulate, Report};
use scheduler::{Batch, Pid, Policy, Time};

mod fcfs;
mod round_robin;

/// Quantum used when a test does not care about Round Robin.
const QUANTUM: usize = 2;

fn batch(entries: &[(Time, Time)]) -> Batch {
    Batch::without_priorities(entries.iter().copied()).unwrap()
}

fn batch_with_priorities(entries: &[(Time, Time, i32)]) -> Batch {
    Batch::new(entries.iter().copied()).unwrap()
}

fn report(batch: &Batch, policy: Policy, quantum: usize) -> Report {
    simulate(batch, policy, Some(quantum)).unwrap()
}

fn pids(values: &[usize]) -> Vec<Pid> {
    values.iter().map(|&pid| Pid::new(pid)).collect()
}

fn starts(values: &[(usize, Time)]) -> Vec<(Pid, Time)> {
    values.iter().map(|&(pid, time)| (Pid::new(pid), time)).collect()
}

fn assert_close(left: f64, right: f64) {
    assert!(
        (left - right).abs() < 1e-9,
        "left = {left}, right = {right}"
    );
}

/// Prints the report and checks the properties every report must have,
/// whatever the policy.
fn run(folder: &str, name: &str, batch: &Batch, report: &Report) {
    println!("\n{folder}::{name}\n{report}");

    assert_eq!(report.processes.len(), batch.len());

    let mut accounted = 0;
    for (process, metrics) in batch.processes().iter().zip(&report.processes) {
        assert_eq!(metrics.pid, process.pid);
        assert!(
            metrics.completion >= process.arrival + process.burst,
            "P{} completed before it could have run",
            process.pid
        );
        assert_eq!(metrics.turnaround, metrics.completion - process.arrival);
        assert_eq!(metrics.waiting, metrics.turnaround - process.burst);
        assert!(metrics.response <= metrics.waiting);
        accounted += metrics.turnaround - metrics.waiting;
    }
    assert_eq!(accounted, batch.total_burst());

    let segments = report.gantt.segments();
    let busy: Time = segments.iter().map(|segment| segment.end - segment.start).sum();
    assert_eq!(busy, batch.total_burst());
    for pair in segments.windows(2) {
        assert!(pair[0].end <= pair[1].start, "segments overlap: {pair:?}");
        assert!(
            pair[0].pid != pair[1].pid || pair[0].end < pair[1].start,
            "unmerged segments: {pair:?}"
        );
    }

    let last = report.processes.iter().map(|process| process.completion).max();
    assert_eq!(Some(report.gantt.end()), last);
}
