use log::trace;

use crate::{BatchError, Pid, ProcessDescriptor, ProcessState, Time};

/// The validated input of a simulation: at least one process, every burst positive.
///
/// A batch is never mutated by a run, so the same batch can be simulated
/// under every policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    processes: Vec<ProcessDescriptor>,
}

impl Batch {
    /// Builds a batch from `(arrival, burst, priority)` entries.
    ///
    /// PIDs are assigned in input order, starting from 1.
    pub fn new<I>(entries: I) -> Result<Batch, BatchError>
    where
        I: IntoIterator<Item = (Time, Time, i32)>,
    {
        let processes = entries
            .into_iter()
            .enumerate()
            .map(|(index, (arrival, burst, priority))| ProcessDescriptor {
                pid: Pid::new(1) + index,
                arrival,
                burst,
                priority,
            })
            .collect::<Vec<_>>();

        if processes.is_empty() {
            return Err(BatchError::Empty);
        }
        if let Some(process) = processes.iter().find(|process| process.burst == 0) {
            return Err(BatchError::ZeroBurst(process.pid));
        }

        Ok(Batch { processes })
    }

    /// Same as [`Batch::new`] for policies that ignore priorities.
    pub fn without_priorities<I>(entries: I) -> Result<Batch, BatchError>
    where
        I: IntoIterator<Item = (Time, Time)>,
    {
        Batch::new(
            entries
                .into_iter()
                .map(|(arrival, burst)| (arrival, burst, 0)),
        )
    }

    pub fn processes(&self) -> &[ProcessDescriptor] {
        &self.processes
    }

    /// Never 0, a batch always holds at least one process.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn total_burst(&self) -> Time {
        self.processes.iter().map(|process| process.burst).sum()
    }
}

/// Per-run bookkeeping: the batch's descriptors next to a fresh
/// [`ProcessState`] for each of them.
///
/// States are indexed by [`Pid::index`].
#[derive(Debug)]
pub struct Registry<'a> {
    batch: &'a Batch,
    states: Vec<ProcessState>,
}

impl<'a> Registry<'a> {
    pub fn new(batch: &'a Batch) -> Registry<'a> {
        Registry {
            batch,
            states: batch
                .processes()
                .iter()
                .map(|process| ProcessState::new(process.burst))
                .collect(),
        }
    }

    pub fn state(&self, pid: Pid) -> &ProcessState {
        &self.states[pid.index()]
    }

    pub fn states(&self) -> impl Iterator<Item = (&'a ProcessDescriptor, &ProcessState)> {
        self.batch.processes().iter().zip(self.states.iter())
    }

    /// Processes that have arrived by `now` and still need CPU time, in PID order.
    pub fn ready(&self, now: Time) -> impl Iterator<Item = (&'a ProcessDescriptor, &ProcessState)> {
        self.states()
            .filter(move |(process, state)| process.arrival <= now && !state.is_completed())
    }

    pub fn all_completed(&self) -> bool {
        self.states.iter().all(ProcessState::is_completed)
    }

    /// Runs `pid` for `amount` time units starting at `now`, returning the
    /// time actually consumed.
    ///
    /// The amount is clamped to the remaining time. When the remaining
    /// time reaches 0 the completion time is recorded.
    pub fn execute(&mut self, pid: Pid, now: Time, amount: Time) -> Time {
        let state = &mut self.states[pid.index()];
        let used = amount.min(state.remaining);

        state.first_run.get_or_insert(now);
        state.remaining -= used;
        if state.remaining == 0 && state.completion.is_none() {
            state.completion = Some(now + used);
        }
        trace!("P{} ran {}..{}, {}", pid, now, now + used, state);

        used
    }
}
