//! Solve command: one equation from the command line.

use quadratic_core::{solve_text, Solution};
use tracing::{debug, info};

use super::render;
use crate::config::OutputFormat;
use crate::Result;

/// Solves `a·x² + b·x + c = target` from literal arguments.
///
/// Unparsable literals are not an error here: they yield the
/// invalid-input status, which is printed like any other result.
pub fn solve(a: &str, b: &str, c: &str, target: &str) -> Solution {
    debug!(a, b, c, target, "solving from literals");
    solve_text(a, b, c, target)
}

/// Runs the solve command and prints the result.
pub fn run(a: &str, b: &str, c: &str, target: &str, format: OutputFormat) -> Result<()> {
    let solution = solve(a, b, c, target);
    info!(%solution, "solved");
    println!("{}", render(&solution, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadratic_core::Status;

    #[test]
    fn test_solve_literals() {
        assert_eq!(solve("1", "2", "8", "7").to_string(), "[-1, -1]");
        assert_eq!(solve("1", "0", "0", "7").to_string(), "[-sqrt(7), sqrt(7)]");
    }

    #[test]
    fn test_solve_complex_literals() {
        assert_eq!(solve("1", "0", "1", "0").to_string(), "[-i, i]");
        assert!(solve("1j", "2", "3", "0").roots().is_some());
    }

    #[test]
    fn test_solve_rejects_words() {
        assert_eq!(solve("abc", "2", "5", "7").status(), Some(Status::InvalidInput));
        assert_eq!(solve("true", "2", "3", "7").status(), Some(Status::InvalidInput));
        assert_eq!(solve("inf", "2", "3", "7").status(), Some(Status::InvalidInput));
    }

    #[test]
    fn test_run_prints() {
        assert!(run("0", "2", "5", "7", OutputFormat::Json).is_ok());
    }
}
