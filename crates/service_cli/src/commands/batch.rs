//! Batch command: many equations from a JSON array.
//!
//! Input is an array of request objects:
//!
//! ```text
//! [{"a": 1, "b": -3, "c": 2}, {"a": 0, "b": 2, "c": 5, "target": 9}]
//! ```
//!
//! Entries without a `target` use the configured default. Entries that are
//! not objects, or whose fields fail validation, yield the invalid-input
//! status in place; they never abort the batch.

use std::io::Read;
use std::path::Path;

use quadratic_core::{solve, solve_request, validate, Scalar, Solution, SolveRequest, Status};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::render;
use crate::config::OutputFormat;
use crate::Result;

/// Solves every request in `content`, in order.
///
/// # Errors
///
/// Fails only when `content` is not a JSON array.
pub fn solve_all(content: &str, default_target: &Scalar) -> Result<Vec<Solution>> {
    let entries: Vec<Value> = serde_json::from_str(content)?;
    debug!(count = entries.len(), "read batch");
    Ok(entries
        .into_iter()
        .map(|entry| solve_entry(entry, default_target))
        .collect())
}

fn solve_entry(entry: Value, default_target: &Scalar) -> Solution {
    let Value::Object(map) = entry else {
        warn!("batch entry is not an object");
        return Status::InvalidInput.into();
    };
    let has_target = map.contains_key("target");

    let request: SolveRequest = match serde_json::from_value(Value::Object(map)) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "malformed batch entry");
            return Status::InvalidInput.into();
        }
    };
    if has_target {
        return solve_request(&request);
    }

    let coefficients = (
        validate("a", request.a.as_ref()),
        validate("b", request.b.as_ref()),
        validate("c", request.c.as_ref()),
    );
    match coefficients {
        (Ok(a), Ok(b), Ok(c)) => solve(a, b, c, default_target.clone()),
        _ => Status::InvalidInput.into(),
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(Path::new(path))?)
    }
}

/// Runs the batch command, printing one line per request.
pub fn run(path: &str, default_target: &Scalar, format: OutputFormat) -> Result<()> {
    let solutions = solve_all(&read_input(path)?, default_target)?;
    for solution in &solutions {
        println!("{}", render(solution, format)?);
    }
    info!(count = solutions.len(), "batch complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(content: &str, target: Scalar) -> Vec<String> {
        solve_all(content, &target)
            .unwrap()
            .iter()
            .map(Solution::to_string)
            .collect()
    }

    #[test]
    fn test_batch_in_order() {
        let out = rendered(
            r#"[{"a": 0, "b": 2, "c": 5}, {"a": 1, "b": 2, "c": 8}, {"a": 0, "b": 0, "c": 7}]"#,
            Scalar::from(7),
        );
        assert_eq!(
            out,
            vec![
                "[1]",
                "[-1, -1]",
                "infinitely many solutions (identity 0=0)"
            ]
        );
    }

    #[test]
    fn test_batch_uses_configured_target() {
        let out = rendered(r#"[{"a": 0, "b": 2, "c": 5}]"#, Scalar::from(9));
        assert_eq!(out, vec!["[2]"]);
    }

    #[test]
    fn test_batch_explicit_target_wins() {
        let out = rendered(r#"[{"a": 0, "b": 2, "c": 5, "target": 5}]"#, Scalar::from(9));
        assert_eq!(out, vec!["[0]"]);
    }

    #[test]
    fn test_batch_invalid_entries_do_not_abort() {
        let out = rendered(
            concat!(
                r#"[42, {"a": "abc", "b": 2, "c": 5}, {"a": true, "b": 2, "c": 3}, "#,
                r#"{"b": 2, "c": 3}, {"a": 1, "b": 0, "c": 1, "target": 0}]"#,
            ),
            Scalar::from(7),
        );
        let invalid = Status::InvalidInput.to_string();
        assert_eq!(out[..4], [invalid.clone(), invalid.clone(), invalid.clone(), invalid]);
        assert_eq!(out[4], "[-i, i]");
    }

    #[test]
    fn test_batch_null_target_is_invalid() {
        let out = rendered(r#"[{"a": 0, "b": 2, "c": 5, "target": null}]"#, Scalar::from(7));
        assert_eq!(out, vec![Status::InvalidInput.to_string()]);
    }

    #[test]
    fn test_batch_requires_array() {
        assert!(solve_all(r#"{"a": 1}"#, &Scalar::from(7)).is_err());
        assert!(solve_all("not json", &Scalar::from(7)).is_err());
    }
}
