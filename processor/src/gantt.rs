//! The Gantt timeline of one run.

use std::fmt::{self, Display};

use scheduler::{Pid, Time};

/// A maximal interval during which one process held the CPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
}

/// Ordered execution segments plus the time the run ended.
///
/// Idle time is never recorded as a segment, it shows up as a gap between
/// one segment's end and the next one's start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gantt {
    segments: Vec<Segment>,
    end: Time,
}

impl Gantt {
    pub fn new() -> Gantt {
        Gantt::default()
    }

    /// Records that `pid` ran from `start` to `end`.
    ///
    /// Extends the last segment when the same process continues without a
    /// gap, otherwise opens a new one.
    pub fn record(&mut self, pid: Pid, start: Time, end: Time) {
        match self.segments.last_mut() {
            Some(last) if last.pid == pid && last.end == start => last.end = end,
            _ => self.segments.push(Segment { pid, start, end }),
        }
    }

    /// Closes the timeline at `end`.
    pub fn finalize(&mut self, end: Time) {
        self.end = end;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The `(pid, start)` sequence of the timeline.
    pub fn starts(&self) -> Vec<(Pid, Time)> {
        self.segments
            .iter()
            .map(|segment| (segment.pid, segment.start))
            .collect()
    }

    pub fn end(&self) -> Time {
        self.end
    }

    /// Time the CPU spent without a process between 0 and [`Gantt::end`].
    pub fn idle_time(&self) -> Time {
        let busy: Time = self
            .segments
            .iter()
            .map(|segment| segment.end - segment.start)
            .sum();
        self.end - busy
    }
}

impl Display for Gantt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return writeln!(f, "No execution segments to display");
        }

        let mut labels = Vec::new();
        let mut cursor = 0;
        for segment in &self.segments {
            if segment.start > cursor {
                labels.push((String::from("IDLE"), cursor));
            }
            labels.push((format!("P{}", segment.pid), segment.start));
            cursor = segment.end;
        }

        let names = labels
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>();
        writeln!(f, "{}", names.join(" | "))?;

        write!(f, "{}", labels[0].1)?;
        for (_, start) in labels.iter().skip(1) {
            write!(f, "{:>6}", start)?;
        }
        writeln!(f, "{:>6}", self.end)
    }
}
