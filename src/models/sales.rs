//! Sales record data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line item of the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Store identifier (e.g. `TX_1`).
    pub store_id: String,
    /// State the store belongs to.
    pub state_id: String,
    /// Item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Department identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
    /// Product category (e.g. `FOODS`).
    pub cat_id: String,
    /// Sale date.
    pub date: NaiveDate,
    /// Unit price.
    pub sell_price: f64,
    /// Units sold.
    pub units: i64,
}

impl SalesRecord {
    /// Revenue of this line item.
    pub fn revenue(&self) -> f64 {
        self.sell_price * self.units as f64
    }
}

/// Derive the state from a store identifier such as `CA_3`.
///
/// Store identifiers without an underscore are their own state.
pub fn state_from_store(store_id: &str) -> String {
    match store_id.split_once('_') {
        Some((state, _)) if !state.is_empty() => state.to_string(),
        _ => store_id.to_string(),
    }
}

/// Columns recognised in the input header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesColumn {
    StoreId,
    StateId,
    ItemId,
    DeptId,
    CatId,
    Date,
    SellPrice,
    Units,
}

impl SalesColumn {
    /// All columns, in table order.
    pub const ALL: [SalesColumn; 8] = [
        SalesColumn::StoreId,
        SalesColumn::StateId,
        SalesColumn::ItemId,
        SalesColumn::DeptId,
        SalesColumn::CatId,
        SalesColumn::Date,
        SalesColumn::SellPrice,
        SalesColumn::Units,
    ];

    /// Canonical column name, as stored in the sales table.
    pub fn name(self) -> &'static str {
        match self {
            SalesColumn::StoreId => "store_id",
            SalesColumn::StateId => "state_id",
            SalesColumn::ItemId => "item_id",
            SalesColumn::DeptId => "dept_id",
            SalesColumn::CatId => "cat_id",
            SalesColumn::Date => "date",
            SalesColumn::SellPrice => "sell_price",
            SalesColumn::Units => "units",
        }
    }

    /// Header names accepted for this column (lowercase).
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            SalesColumn::StoreId => &["store_id", "store"],
            SalesColumn::StateId => &["state_id", "state"],
            SalesColumn::ItemId => &["item_id", "item"],
            SalesColumn::DeptId => &["dept_id", "department"],
            SalesColumn::CatId => &["cat_id", "category"],
            SalesColumn::Date => &["date"],
            SalesColumn::SellPrice => &["sell_price", "unit_price", "price"],
            SalesColumn::Units => &["units", "quantity", "sales"],
        }
    }

    /// Whether every data row must carry a value for this column.
    pub fn is_required(self) -> bool {
        !matches!(
            self,
            SalesColumn::StateId | SalesColumn::ItemId | SalesColumn::DeptId
        )
    }

    /// Resolve a raw header cell to a column.
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized = header.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|col| col.aliases().contains(&normalized.as_str()))
    }
}

impl fmt::Display for SalesColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
