//! Argument splitting helpers
//!
//! Parameters may be passed as one comma-separated argument, e.g.
//! `--params "0.0,2.5"`, and choice items as `a,b,c` or as separate words.

use crate::{CliError, Result};

/// Splits a comma-separated list of reals.
///
/// Fields are trimmed. Empty input, empty fields and non-numeric fields are
/// rejected.
pub fn split_params(input: &str) -> Result<Vec<f64>> {
    if input.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "expected at least one parameter".to_string(),
        ));
    }

    input
        .split(',')
        .enumerate()
        .map(|(position, field)| {
            let field = field.trim();
            if field.is_empty() {
                return Err(CliError::InvalidArgument(format!(
                    "empty parameter at position {} in '{}'",
                    position + 1,
                    input
                )));
            }
            field.parse::<f64>().map_err(|_| {
                CliError::InvalidArgument(format!("'{}' is not a number", field))
            })
        })
        .collect()
}

/// Splits exactly `N` reals out of `input`, failing on any other count.
pub fn split_exact<const N: usize>(input: &str) -> Result<[f64; N]> {
    let values = split_params(input)?;
    let count = values.len();
    values.try_into().map_err(|_| {
        CliError::InvalidArgument(format!(
            "expected {} parameters in '{}', found {}",
            N, input, count
        ))
    })
}

/// Expands comma-separated items, dropping blanks.
pub fn split_items(items: &[String]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
