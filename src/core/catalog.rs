//! Fixed catalog of analytical statements.
//!
//! Every statement orders its rows totally so that output is reproducible.

use crate::models::query::{ChartColumns, NamedQuery};
use crate::{Error, Result};

/// All catalog statements, in reporting order.
pub const CATALOG: &[NamedQuery] = &[
    NamedQuery {
        name: "sales_summary",
        description: "How many records, stores and categories were loaded, and what did they sell in total?",
        sql: r#"
            SELECT COUNT(*) AS records,
                   COUNT(DISTINCT store_id) AS stores,
                   COUNT(DISTINCT cat_id) AS categories,
                   COALESCE(SUM(units), 0) AS units,
                   ROUND(COALESCE(SUM(revenue), 0), 2) AS revenue
            FROM sales
        "#,
        chart: None,
    },
    NamedQuery {
        name: "revenue_by_category",
        description: "Which product categories bring in the most revenue?",
        sql: r#"
            SELECT cat_id,
                   COUNT(*) AS records,
                   SUM(units) AS units,
                   ROUND(SUM(revenue), 2) AS revenue
            FROM sales
            GROUP BY cat_id
            ORDER BY SUM(revenue) DESC, cat_id
        "#,
        chart: Some(ChartColumns {
            label: "cat_id",
            value: "revenue",
        }),
    },
    NamedQuery {
        name: "revenue_by_store",
        description: "Which stores bring in the most revenue?",
        sql: r#"
            SELECT store_id,
                   state_id,
                   SUM(units) AS units,
                   ROUND(SUM(revenue), 2) AS revenue
            FROM sales
            GROUP BY store_id, state_id
            ORDER BY SUM(revenue) DESC, store_id, state_id
        "#,
        chart: Some(ChartColumns {
            label: "store_id",
            value: "revenue",
        }),
    },
    NamedQuery {
        name: "monthly_category_trend",
        description: "How do units and revenue per category move month by month?",
        sql: r#"
            SELECT substr(date, 1, 7) AS month,
                   cat_id,
                   SUM(units) AS units,
                   ROUND(SUM(revenue), 2) AS revenue
            FROM sales
            GROUP BY month, cat_id
            ORDER BY month, cat_id
        "#,
        chart: None,
    },
    NamedQuery {
        name: "category_share_by_state",
        description: "What share of each state's revenue does every category account for?",
        sql: r#"
            WITH state_totals AS (
                SELECT state_id, SUM(revenue) AS total
                FROM sales
                GROUP BY state_id
            )
            SELECT s.state_id,
                   s.cat_id,
                   ROUND(SUM(s.revenue), 2) AS revenue,
                   ROUND(100.0 * SUM(s.revenue) / NULLIF(t.total, 0), 2) AS share_pct
            FROM sales s
            JOIN state_totals t ON t.state_id = s.state_id
            GROUP BY s.state_id, s.cat_id
            ORDER BY s.state_id, SUM(s.revenue) DESC, s.cat_id
        "#,
        chart: None,
    },
    NamedQuery {
        name: "price_stats_by_category",
        description: "What are the lowest, average and highest unit prices per category?",
        sql: r#"
            SELECT cat_id,
                   ROUND(MIN(sell_price), 2) AS min_price,
                   ROUND(AVG(sell_price), 2) AS avg_price,
                   ROUND(MAX(sell_price), 2) AS max_price
            FROM sales
            GROUP BY cat_id
            ORDER BY cat_id
        "#,
        chart: None,
    },
    NamedQuery {
        name: "max_price_by_state",
        description: "What is the highest unit price sold in each state?",
        sql: r#"
            SELECT state_id,
                   ROUND(MAX(sell_price), 2) AS max_price
            FROM sales
            GROUP BY state_id
            ORDER BY state_id
        "#,
        chart: Some(ChartColumns {
            label: "state_id",
            value: "max_price",
        }),
    },
    NamedQuery {
        name: "top_items_by_units",
        description: "Which ten items sell the most units?",
        sql: r#"
            SELECT item_id,
                   cat_id,
                   SUM(units) AS units,
                   ROUND(SUM(revenue), 2) AS revenue
            FROM sales
            WHERE item_id IS NOT NULL
            GROUP BY item_id, cat_id
            ORDER BY SUM(units) DESC, item_id, cat_id
            LIMIT 10
        "#,
        chart: None,
    },
];

/// Look up a statement by name.
pub fn find(name: &str) -> Option<&'static NamedQuery> {
    CATALOG.iter().find(|q| q.name == name)
}

/// Resolve a selection of statement names.
///
/// An empty selection means the whole catalog. Duplicates are run once, in
/// the order first named.
pub fn select(names: &[String]) -> Result<Vec<&'static NamedQuery>> {
    if names.is_empty() {
        return Ok(CATALOG.iter().collect());
    }

    let mut selected: Vec<&'static NamedQuery> = Vec::with_capacity(names.len());
    for name in names {
        let query = find(name).ok_or_else(|| Error::UnknownQuery(name.clone()))?;
        if !selected.iter().any(|q| q.name == query.name) {
            selected.push(query);
        }
    }
    Ok(selected)
}
