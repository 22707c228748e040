//! Runner configuration, read from the environment and the command line.
//!
//! * `POLICY` - a policy name, a menu number, or `all` (default `all`)
//! * `QUANTUM` - the Round Robin time quantum (default `2`)
//! * `LOG_LEVEL` - `off`, `error`, `warn`, `info`, `debug` or `trace` (default `warn`)
//! * `TRACE` - when set, the decision logs are printed after each report
//!
//! The first argument overrides `POLICY`, the others are processes written
//! as `ARRIVAL:BURST[:PRIORITY]`. The priority is required whenever one of
//! the selected policies reads it, `all` included.

use std::fmt::{self, Display};

use log::LevelFilter;
use scheduler::{Batch, Policy};

const DEFAULT_QUANTUM: usize = 2;

/// Used when no process is given on the command line.
const DEMO_BATCH: [(usize, usize, i32); 4] = [(0, 7, 3), (1, 4, 1), (2, 1, 4), (3, 4, 2)];

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Scheduler(scheduler::Error),

    /// A process argument that is not `ARRIVAL:BURST[:PRIORITY]`.
    InvalidProcess(String),

    InvalidValue { name: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Scheduler(err) => write!(f, "{}", err),
            ConfigError::InvalidProcess(arg) => write!(
                f,
                "invalid process `{}`, expected ARRIVAL:BURST[:PRIORITY] with non-negative times",
                arg
            ),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "invalid value `{}` for {}", value, name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<scheduler::Error> for ConfigError {
    fn from(err: scheduler::Error) -> Self {
        ConfigError::Scheduler(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub policies: Vec<Policy>,
    pub quantum: usize,
    pub log_level: LevelFilter,
    pub trace: bool,
    pub batch: Batch,
}

impl Config {
    /// * `args` - the command line arguments, without the program name.
    /// * `var` - looks up an environment variable.
    pub fn load<F>(args: &[String], var: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (policy, processes) = match args.split_first() {
            Some((policy, processes)) => (policy.clone(), processes),
            None => (var("POLICY").unwrap_or_else(|| "all".to_string()), args),
        };

        let policies = if policy.eq_ignore_ascii_case("all") {
            Policy::ALL.to_vec()
        } else {
            vec![policy.parse::<Policy>()?]
        };

        let quantum = match var("QUANTUM") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "QUANTUM",
                    value,
                })?,
            None => DEFAULT_QUANTUM,
        };

        let log_level = match var("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "LOG_LEVEL",
                    value,
                })?,
            None => LevelFilter::Warn,
        };

        let needs_priority = policies.iter().any(Policy::uses_priority);
        let batch = if processes.is_empty() {
            Batch::new(DEMO_BATCH)
        } else {
            Batch::new(
                processes
                    .iter()
                    .map(|arg| parse_process(arg, needs_priority))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        }
        .map_err(scheduler::Error::from)?;

        Ok(Config {
            policies,
            quantum,
            log_level,
            trace: var("TRACE").is_some(),
            batch,
        })
    }
}

/// Parses `ARRIVAL:BURST[:PRIORITY]`. A missing priority is 0 unless
/// `needs_priority` is set.
fn parse_process(arg: &str, needs_priority: bool) -> Result<(usize, usize, i32), ConfigError> {
    let invalid = || ConfigError::InvalidProcess(arg.to_string());

    let fields = arg.split(':').map(str::trim).collect::<Vec<_>>();
    let (arrival, burst, priority) = match fields.as_slice() {
        [arrival, burst] if !needs_priority => (arrival, burst, None),
        [arrival, burst, priority] => (arrival, burst, Some(priority)),
        _ => return Err(invalid()),
    };

    let arrival = arrival.parse::<usize>().map_err(|_| invalid())?;
    let burst = burst.parse::<usize>().map_err(|_| invalid())?;
    let priority = match priority {
        Some(priority) => priority.parse::<i32>().map_err(|_| invalid())?,
        None => 0,
    };
    Ok((arrival, burst, priority))
}
