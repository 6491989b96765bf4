//! Plain-text table generator.

use crate::models::query::QueryResult;

/// Longest cell printed before truncation.
const MAX_CELL_WIDTH: usize = 40;

/// Truncate a cell to `MAX_CELL_WIDTH` characters.
fn fit(cell: String) -> String {
    if cell.chars().count() > MAX_CELL_WIDTH {
        format!("{}...", cell.chars().take(MAX_CELL_WIDTH - 3).collect::<String>())
    } else {
        cell
    }
}

/// Pad `cell` to `width` characters.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.chars().count()));
    if right_align {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}

/// Render a query result as an aligned text table.
///
/// Numeric columns are right aligned. Every line ends with a newline.
pub fn render_table(result: &QueryResult) -> String {
    let cells: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| row.iter().map(|v| fit(v.to_string())).collect())
        .collect();

    let widths: Vec<usize> = result
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            cells
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|c| c.chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    // A column is numeric when every non-null value in it is.
    let numeric: Vec<bool> = (0..result.columns.len())
        .map(|idx| {
            let mut values = result.rows.iter().filter_map(|r| r.get(idx)).peekable();
            values.peek().is_some()
                && values
                    .filter(|v| !matches!(v, crate::models::query::Value::Null))
                    .all(|v| v.is_numeric())
        })
        .collect();

    let mut out = String::new();

    let header: Vec<String> = result
        .columns
        .iter()
        .enumerate()
        .map(|(idx, c)| pad(c, widths[idx], numeric[idx]))
        .collect();
    out.push_str(header.join(" | ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    if cells.is_empty() {
        out.push_str("(no rows)\n");
        return out;
    }

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(idx, c)| pad(c, widths[idx], numeric[idx]))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }

    out.push_str(&format!(
        "({} row{})\n",
        cells.len(),
        if cells.len() == 1 { "" } else { "s" }
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::query::Value;

    #[test]
    fn test_render_table() {
        let result = QueryResult {
            name: "revenue_by_category".to_string(),
            columns: vec!["cat_id".to_string(), "revenue".to_string()],
            rows: vec![
                vec![Value::Text("FOODS".into()), Value::Real(20.0)],
                vec![Value::Text("HOBBIES".into()), Value::Real(10.0)],
            ],
        };

        let expected = "\
cat_id  | revenue
--------+--------
FOODS   |   20.00
HOBBIES |   10.00
(2 rows)
";
        assert_eq!(render_table(&result), expected);
    }

    #[test]
    fn test_render_empty_table() {
        let result = QueryResult {
            name: "revenue_by_category".to_string(),
            columns: vec!["cat_id".to_string(), "revenue".to_string()],
            rows: vec![],
        };

        assert_eq!(
            render_table(&result),
            "cat_id | revenue\n-------+--------\n(no rows)\n"
        );
    }

    #[test]
    fn test_long_cells_truncated() {
        let result = QueryResult {
            name: "x".to_string(),
            columns: vec!["item_id".to_string()],
            rows: vec![vec![Value::Text("A".repeat(60))]],
        };

        let rendered = render_table(&result);
        let line = rendered.lines().nth(2).unwrap();
        assert_eq!(line.chars().count(), MAX_CELL_WIDTH);
        assert!(line.ends_with("..."));
    }
}
