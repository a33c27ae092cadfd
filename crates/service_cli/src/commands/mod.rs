//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Results are printed
//! through [`render`] so every command honours the output format.

pub mod batch;
pub mod check;
pub mod demo;
pub mod solve;

use quadratic_core::Solution;

use crate::config::OutputFormat;
use crate::Result;

/// Renders a solution in the requested format, one line.
pub fn render(solution: &Solution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(solution.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(solution)?),
    }
}
