use core::module_path;
use function_name::named;
use pretty_assertions::assert_eq;
use scheduler::Policy;

use super::{assert_close, batch, report, run, starts};

#[test]
#[named]
pub fn quantum_rotation() {
    let batch = batch(&[(0, 5), (0, 3), (0, 2)]);
    let report = report(&batch, Policy::RoundRobin, 2);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    assert_eq!(
        report.gantt.starts(),
        starts(&[(1, 0), (2, 2), (3, 4), (1, 6), (2, 8), (1, 9)])
    );
    assert_eq!(report.gantt.end(), 10);
    assert_eq!(report.completions(), vec![10, 9, 6]);
    assert_eq!(report.waitings(), vec![5, 6, 4]);
    assert_close(report.average_waiting, 5.0);
    assert_close(report.average_turnaround, 25.0 / 3.0);
}

#[test]
#[named]
pub fn staggered_arrivals() {
    let batch = batch(&[(0, 5), (1, 4), (2, 2), (3, 1)]);
    let report = report(&batch, Policy::RoundRobin, 2);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    assert_eq!(
        report.gantt.starts(),
        starts(&[(1, 0), (2, 2), (3, 4), (1, 6), (4, 8), (2, 9), (1, 11)])
    );
    assert_eq!(report.completions(), vec![12, 11, 6, 9]);
    assert_eq!(report.waitings(), vec![7, 6, 2, 5]);
    assert_close(report.average_waiting, 5.0);
    assert_close(report.average_turnaround, 8.0);
}

#[test]
#[named]
pub fn arrival_on_quantum_boundary_goes_first() {
    let batch = batch(&[(0, 4), (2, 2)]);
    let report = report(&batch, Policy::RoundRobin, 2);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    assert_eq!(report.gantt.starts(), starts(&[(1, 0), (2, 2), (1, 4)]));
    assert_eq!(report.completions(), vec![6, 4]);
}

#[test]
#[named]
pub fn lone_process_is_one_segment() {
    let batch = batch(&[(0, 5)]);
    let report = report(&batch, Policy::RoundRobin, 2);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    assert_eq!(report.gantt.starts(), starts(&[(1, 0)]));
    assert_eq!(report.gantt.end(), 5);
    assert_eq!(report.logs.len(), 3);
}

#[test]
#[named]
pub fn idle_until_next_arrival() {
    let batch = batch(&[(0, 1), (3, 2)]);
    let report = report(&batch, Policy::RoundRobin, 2);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    assert_eq!(report.gantt.starts(), starts(&[(1, 0), (2, 3)]));
    assert_eq!(report.completions(), vec![1, 5]);
    assert_eq!(report.gantt.idle_time(), 2);
}

#[test]
#[named]
pub fn large_quantum_is_fcfs() {
    let batch = batch(&[(0, 5), (1, 3), (2, 2)]);
    let report = report(&batch, Policy::RoundRobin, 10);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    let fcfs = super::report(&batch, Policy::Fcfs, 10);
    assert_eq!(report.completions(), fcfs.completions());
    assert_eq!(report.gantt, fcfs.gantt);
}
