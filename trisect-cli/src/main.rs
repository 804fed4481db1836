//! Command-line cubic root finder.
//!
//! ```text
//! trisect <a> <b> <c> <step> <tolerance>
//! ```
//!
//! Finds all real roots of the monic cubic `x³ + a·x² + b·x + c` by outward
//! bracket search and bisection, printing each root with its residual
//! magnitude. Bad arguments print a usage message to stderr; any search or
//! bracket failure aborts the run with a nonzero exit status and no partial
//! results.

use std::env;
use std::process::ExitCode;

use thiserror::Error;

use trisect_core::Cubic;
use trisect_solve::bisection::{Solution, Status};
use trisect_solve::roots::{self, Config};

const USAGE: &str = "usage: trisect <a> <b> <c> <step> <tolerance>";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let invocation = match Invocation::parse(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let config = Config::from_step_and_tolerance(invocation.step, invocation.tolerance);

    match roots::find_roots(&invocation.cubic, &config) {
        Ok(found) => {
            report(&found);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn report(found: &[Solution]) {
    println!("roots found: {}", found.len());
    for root in found {
        let note = match root.status {
            Status::Converged => "",
            Status::MaxIters | Status::StoppedByObserver => "  (iteration limit reached)",
        };
        println!(
            "x = {:.12}    |f(x)| = {:.6e}{note}",
            root.x,
            root.residual.abs()
        );
    }
}

/// A fully parsed and validated command line.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Invocation {
    cubic: Cubic,
    step: f64,
    tolerance: f64,
}

/// Rejected command lines.
#[derive(Debug, Error, PartialEq)]
enum UsageError {
    #[error("expected 5 arguments, got {count}")]
    WrongArgCount { count: usize },

    #[error("{name} is not a number: {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

impl Invocation {
    /// Parses the positional arguments `a b c step tolerance`.
    fn parse(args: &[String]) -> Result<Self, UsageError> {
        let [a, b, c, step, tolerance] = args else {
            return Err(UsageError::WrongArgCount { count: args.len() });
        };

        let a = parse_number("a", a)?;
        let b = parse_number("b", b)?;
        let c = parse_number("c", c)?;
        let step = parse_positive("step", step)?;
        let tolerance = parse_positive("tolerance", tolerance)?;

        Ok(Self {
            cubic: Cubic::new(a, b, c),
            step,
            tolerance,
        })
    }
}

fn parse_number(name: &'static str, raw: &str) -> Result<f64, UsageError> {
    raw.parse().map_err(|_| UsageError::NotANumber {
        name,
        value: raw.to_owned(),
    })
}

fn parse_positive(name: &'static str, raw: &str) -> Result<f64, UsageError> {
    let value = parse_number(name, raw)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(UsageError::NotPositive { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn parses_a_full_command_line() {
        let invocation =
            Invocation::parse(&args(&["-6", "11", "-6", "0.01", "1e-9"])).expect("should parse");

        assert_eq!(invocation.cubic, Cubic::new(-6.0, 11.0, -6.0));
        assert_eq!(invocation.step, 0.01);
        assert_eq!(invocation.tolerance, 1e-9);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let result = Invocation::parse(&args(&["-6", "11", "-6", "0.01"]));

        assert_eq!(result, Err(UsageError::WrongArgCount { count: 4 }));
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let result = Invocation::parse(&args(&["-6", "eleven", "-6", "0.01", "1e-9"]));

        assert!(matches!(result, Err(UsageError::NotANumber { name: "b", .. })));
    }

    #[test]
    fn rejects_non_positive_step() {
        for step in ["0", "-0.01", "nan"] {
            let result = Invocation::parse(&args(&["-6", "11", "-6", step, "1e-9"]));
            assert!(matches!(result, Err(UsageError::NotPositive { name: "step", .. })));
        }
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let result = Invocation::parse(&args(&["-6", "11", "-6", "0.01", "0"]));

        assert!(matches!(
            result,
            Err(UsageError::NotPositive { name: "tolerance", .. })
        ));
    }
}
