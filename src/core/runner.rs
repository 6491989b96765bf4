//! Query runner.
//!
//! Executes catalog statements against a loaded sales store.

use crate::core::store::SalesStore;
use crate::models::query::{NamedQuery, QueryResult, Value};
use crate::{Error, Result};

/// Runs catalog statements against one store.
pub struct QueryRunner<'a> {
    store: &'a SalesStore,
}

impl<'a> QueryRunner<'a> {
    pub fn new(store: &'a SalesStore) -> Self {
        Self { store }
    }

    /// Run a single statement.
    pub fn run(&self, query: &NamedQuery) -> Result<QueryResult> {
        if !self.store.is_loaded()? {
            return Err(Error::StoreNotLoaded);
        }

        let query_error = |e: rusqlite::Error| Error::Query {
            query: query.name.to_string(),
            reason: e.to_string(),
        };

        let conn = self.store.connection();
        let mut stmt = conn.prepare(query.sql).map_err(query_error)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt.query([]).map_err(query_error)?;
        while let Some(row) = cursor.next().map_err(query_error)? {
            let mut values = Vec::with_capacity(width);
            for idx in 0..width {
                values.push(Value::from(row.get_ref(idx).map_err(query_error)?));
            }
            rows.push(values);
        }

        tracing::debug!("{} returned {} rows", query.name, rows.len());

        Ok(QueryResult {
            name: query.name.to_string(),
            columns,
            rows,
        })
    }

    /// Run statements in sequence, stopping at the first failure.
    pub fn run_all(&self, queries: &[&NamedQuery]) -> Result<Vec<QueryResult>> {
        queries.iter().map(|q| self.run(q)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use indicatif::ProgressBar;

    #[test]
    fn test_run_before_load() {
        let store = SalesStore::open_in_memory().unwrap();
        let runner = QueryRunner::new(&store);
        let query = catalog::find("sales_summary").unwrap();
        assert!(matches!(runner.run(query), Err(Error::StoreNotLoaded)));
    }

    #[test]
    fn test_unknown_column() {
        let mut store = SalesStore::open_in_memory().unwrap();
        store.replace_all(&[], &ProgressBar::hidden()).unwrap();

        let bogus = NamedQuery {
            name: "profit_by_category",
            description: "",
            sql: "SELECT cat_id, SUM(profit) FROM sales GROUP BY cat_id",
            chart: None,
        };
        match QueryRunner::new(&store).run(&bogus) {
            Err(Error::Query { query, reason }) => {
                assert_eq!(query, "profit_by_category");
                assert!(reason.contains("profit"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_projection_matches_statement() {
        let mut store = SalesStore::open_in_memory().unwrap();
        store.replace_all(&[], &ProgressBar::hidden()).unwrap();

        let result = QueryRunner::new(&store)
            .run(catalog::find("price_stats_by_category").unwrap())
            .unwrap();
        assert_eq!(result.columns, vec!["cat_id", "min_price", "avg_price", "max_price"]);
        assert!(result.is_empty());
    }
}
