//! Check command: effective configuration and a solver self-test.

use quadratic_core::{solve, solve_default, Scalar, Solution, Status};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// A self-test case: label, computed solution, expected text.
struct Scenario {
    label: &'static str,
    solution: Solution,
    expected: &'static str,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            label: "x^2 - 3x + 2 = 7",
            solution: solve(1, -3, 2, 7),
            expected: "[3/2 - sqrt(29)/2, 3/2 + sqrt(29)/2]",
        },
        Scenario {
            label: "x^2 = 7",
            solution: solve(1, 0, 0, 7),
            expected: "[-sqrt(7), sqrt(7)]",
        },
        Scenario {
            label: "x^2 + 1 = 0",
            solution: solve(1, 0, 1, 0),
            expected: "[-i, i]",
        },
        Scenario {
            label: "7 = 7",
            solution: solve(0, 0, 7, 7),
            expected: Status::Identity.message(),
        },
        Scenario {
            label: "6 = 7",
            solution: solve(0, 0, 6, 7),
            expected: Status::Contradiction.message(),
        },
        Scenario {
            label: "2x + 5 = 7",
            solution: solve_default(0, 2, 5),
            expected: "[1]",
        },
        Scenario {
            label: "x^2 + 2x + 8 = 7",
            solution: solve(1, 2, 8, 7),
            expected: "[-1, -1]",
        },
        Scenario {
            label: "inf*x^2 + 2x + 3 = 7",
            solution: solve(f64::INFINITY, 2, 3, 7),
            expected: Status::InvalidInput.message(),
        },
    ]
}

/// Runs the self-test, returning the number of mismatches.
pub fn self_test() -> usize {
    let mut failures = 0;
    for scenario in scenarios() {
        let actual = scenario.solution.to_string();
        if actual == scenario.expected {
            println!("  ok      {}", scenario.label);
        } else {
            println!(
                "  FAILED  {}: expected {}, got {}",
                scenario.label, scenario.expected, actual
            );
            failures += 1;
        }
    }
    failures
}

/// Prints the effective configuration and runs the self-test.
pub fn run(config: &CliConfig, config_path: &str) -> Result<()> {
    let target: Scalar = config.default_target_scalar()?;

    println!("Configuration ({}):", config_path);
    println!("  default_target = {}", target);
    println!("  format         = {}", config.format);
    println!("  log_level      = {}", config.log_level);
    println!();
    println!("Self-test:");

    let failures = self_test();
    info!(failures, "self-test finished");
    if failures > 0 {
        return Err(CliError::SelfTest(failures));
    }
    println!("All checks passed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_passes() {
        assert_eq!(self_test(), 0);
    }

    #[test]
    fn test_check_run() {
        assert!(run(&CliConfig::default(), "quadratic.toml").is_ok());
    }
}
