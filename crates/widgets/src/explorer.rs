//! Opening explorer annotations: each move's share of all games.

use serde::Serialize;

use crate::error::WidgetError;

/// One explorer row with its share of the table total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveShare {
    pub count: u64,
    /// Percentage of the table total, rounded to two decimals
    pub percentage: f64,
}

/// Parse an occurrence count as the explorer prints it: `"1,234,567"`.
pub fn parse_count(text: &str) -> Result<u64, WidgetError> {
    let trimmed = text.trim();
    let invalid = || WidgetError::InvalidCount(text.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    trimmed.split(',').try_fold(0u64, |acc, group| {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u64 = group.parse().map_err(|_| invalid())?;
        acc.checked_mul(1000)
            .and_then(|shifted| shifted.checked_add(value))
            .ok_or_else(invalid)
    })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Each count's share of the total in percent. All zero when the total is 0.
pub fn percentages(counts: &[u64]) -> Vec<f64> {
    let total: u128 = counts.iter().map(|&c| u128::from(c)).sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|&c| round2(c as f64 / total as f64 * 100.0))
        .collect()
}

/// Parse every occurrence cell of the table and compute its share.
pub fn annotate<S: AsRef<str>>(cells: &[S]) -> Result<Vec<MoveShare>, WidgetError> {
    let counts = cells
        .iter()
        .map(|cell| parse_count(cell.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(percentages(&counts)
        .into_iter()
        .zip(&counts)
        .map(|(percentage, &count)| MoveShare { count, percentage })
        .collect())
}

/// `12.5%`, `33.33%`, `100%`
pub fn format_percentage(percentage: f64) -> String {
    format!("{}%", round2(percentage))
}
