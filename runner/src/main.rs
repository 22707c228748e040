use std::env;
use std::process::ExitCode;

use log::error;
use processor::{format_logs, format_reports, simulate};

mod config;
mod logger;

use config::Config;

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let config = match Config::load(&args, |name| env::var(name).ok()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    if let Err(err) = logger::init(config.log_level) {
        eprintln!("error: {}", err);
    }

    let mut reports = Vec::with_capacity(config.policies.len());
    for &policy in &config.policies {
        match simulate(&config.batch, policy, Some(config.quantum)) {
            Ok(report) => reports.push(report),
            Err(err) => {
                error!("{} was not run: {}", policy, err);
                eprintln!("error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    println!("{}", format_reports(&reports));
    if config.trace {
        for report in &reports {
            println!("{}", format_logs(&report.logs));
        }
    }

    ExitCode::SUCCESS
}

// Do not delete this line
#[cfg(test)]
mod tests;
