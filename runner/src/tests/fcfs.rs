use core::module_path;
use function_name::named;
use pretty_assertions::assert_eq;
use scheduler::Policy;

use super::{assert_close, batch, report, run, starts, QUANTUM};

#[test]
#[named]
pub fn arrival_order() {
    let batch = batch(&[(0, 5), (1, 3), (2, 2)]);
    let report = report(&batch, Policy::Fcfs, QUANTUM);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    assert_eq!(report.completions(), vec![5, 8, 10]);
    assert_eq!(report.turnarounds(), vec![5, 7, 8]);
    assert_eq!(report.waitings(), vec![0, 4, 6]);
    assert_close(report.average_waiting, 10.0 / 3.0);
    assert_close(report.average_turnaround, 20.0 / 3.0);
    assert_eq!(report.gantt.starts(), starts(&[(1, 0), (2, 5), (3, 8)]));
    assert_eq!(report.gantt.end(), 10);
}

#[test]
#[named]
pub fn same_arrival_goes_by_pid() {
    let batch = batch(&[(2, 1), (0, 2), (0, 3)]);
    let report = report(&batch, Policy::Fcfs, QUANTUM);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    assert_eq!(report.completions(), vec![6, 2, 5]);
    assert_eq!(report.gantt.starts(), starts(&[(2, 0), (3, 2), (1, 5)]));
}

#[test]
#[named]
pub fn idle_gap() {
    let batch = batch(&[(4, 2), (0, 1)]);
    let report = report(&batch, Policy::Fcfs, QUANTUM);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &batch,
        &report,
    );

    assert_eq!(report.completions(), vec![6, 1]);
    assert_eq!(report.waitings(), vec![0, 0]);
    assert_eq!(report.gantt.starts(), starts(&[(2, 0), (1, 4)]));
    assert_eq!(report.gantt.idle_time(), 3);
    assert_eq!(
        report.gantt.to_string(),
        "P2 | IDLE | P1\n0     1     4     6\n"
    );
}
