//! Demo command: the sample call `2x + 5 = 7`.

use quadratic_core::{solve_default, Solution};

use super::render;
use crate::config::OutputFormat;
use crate::Result;

/// The sample equation `0·x² + 2·x + 5 = 7`.
pub fn sample() -> Solution {
    solve_default(0, 2, 5)
}

/// Prints the sample equation and its solution.
pub fn run(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("solve(a=0, b=2, c=5, target=7)");
            println!("{}", render(&sample(), format)?);
        }
        OutputFormat::Json => println!("{}", render(&sample(), format)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_solution() {
        assert_eq!(sample().to_string(), "[1]");
    }

    #[test]
    fn test_demo_run() {
        assert!(run(OutputFormat::Text).is_ok());
    }
}
