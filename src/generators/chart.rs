//! Horizontal bar chart generator.

use crate::models::query::{QueryResult, Value};

const BAR: char = '█';

/// Render `value` against `label` as a horizontal bar chart.
///
/// Bars are scaled so the largest value spans `width` characters. Rows whose
/// value is not a positive number get an empty bar. Returns `None` when the
/// result has no rows or lacks either column.
pub fn render_bar_chart(
    result: &QueryResult,
    label: &str,
    value: &str,
    width: usize,
) -> Option<String> {
    let label_idx = result.column_index(label)?;
    let value_idx = result.column_index(value)?;
    if result.is_empty() {
        return None;
    }

    let bars: Vec<(String, Option<f64>)> = result
        .rows
        .iter()
        .map(|row| {
            let label = row.get(label_idx).map(Value::to_string).unwrap_or_default();
            let value = row.get(value_idx).and_then(Value::as_f64);
            (label, value)
        })
        .collect();

    let label_width = bars
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let max = bars
        .iter()
        .filter_map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (label, amount) in &bars {
        let len = match amount {
            Some(v) if *v > 0.0 && max > 0.0 => ((v / max) * width as f64).round() as usize,
            _ => 0,
        };
        let shown = amount.map(|v| format!("{:.2}", v)).unwrap_or_default();
        let line = format!(
            "{:<lw$} | {} {}",
            label,
            BAR.to_string().repeat(len),
            shown,
            lw = label_width
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    Some(out)
}
