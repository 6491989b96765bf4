//! Sales dataset loader.
//!
//! Reads delimited sales files, validates every row, and replaces the sales
//! table with the result. Nothing is written to the store until the whole
//! input has been validated.

use crate::core::store::SalesStore;
use crate::models::report::SourceFile;
use crate::models::sales::{state_from_store, SalesColumn, SalesRecord};
use crate::utils::{fs as fs_utils, hash};
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Largest unit count accepted on one line.
///
/// Keeps `SUM(units)` well inside `i64` for any realistic dataset size.
pub const MAX_UNITS: i64 = 1_000_000_000;

/// Loader options.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// `chrono` format of the date column.
    pub date_format: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    /// Files read, in load order.
    pub sources: Vec<SourceFile>,
    /// Rows written to the sales table.
    pub rows: u64,
}

/// Records read from one input file.
#[derive(Debug)]
pub struct FileRecords {
    pub source: SourceFile,
    pub records: Vec<SalesRecord>,
}

/// Position of each recognised column in a header row.
#[derive(Debug)]
struct ColumnMap {
    positions: HashMap<SalesColumn, usize>,
}

impl ColumnMap {
    /// Resolve a header row. The first occurrence of a column wins.
    fn from_headers(headers: &StringRecord, source: &str) -> Result<Self> {
        let mut positions = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if let Some(column) = SalesColumn::from_header(header) {
                positions.entry(column).or_insert(idx);
            }
        }

        if let Some(missing) = SalesColumn::ALL
            .into_iter()
            .find(|c| c.is_required() && !positions.contains_key(c))
        {
            return Err(Error::MissingColumn {
                file: source.to_string(),
                column: missing.name().to_string(),
            });
        }

        Ok(Self { positions })
    }

    /// Trimmed, non-empty cell for `column`.
    fn cell<'r>(&self, record: &'r StringRecord, column: SalesColumn) -> Option<&'r str> {
        self.positions
            .get(&column)
            .and_then(|&idx| record.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Parses the data rows of one source.
struct RowParser<'a> {
    source: &'a str,
    columns: ColumnMap,
    date_format: &'a str,
}

impl RowParser<'_> {
    fn required<'r>(&self, record: &'r StringRecord, line: u64, column: SalesColumn) -> Result<&'r str> {
        self.columns.cell(record, column).ok_or_else(|| {
            Error::validation(self.source, line, format!("column '{}' is empty", column))
        })
    }

    fn optional(&self, record: &StringRecord, column: SalesColumn) -> Option<String> {
        self.columns.cell(record, column).map(str::to_string)
    }

    fn parse(&self, record: &StringRecord) -> Result<SalesRecord> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let store_id = self.required(record, line, SalesColumn::StoreId)?.to_string();
        let cat_id = self.required(record, line, SalesColumn::CatId)?.to_string();

        let raw_date = self.required(record, line, SalesColumn::Date)?;
        let date = NaiveDate::parse_from_str(raw_date, self.date_format).map_err(|_| {
            Error::validation(
                self.source,
                line,
                format!(
                    "column 'date' value '{}' does not match format '{}'",
                    raw_date, self.date_format
                ),
            )
        })?;

        let raw_price = self.required(record, line, SalesColumn::SellPrice)?;
        let sell_price = raw_price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| {
                Error::validation(
                    self.source,
                    line,
                    format!("column 'sell_price' value '{}' is not a non-negative number", raw_price),
                )
            })?;

        let raw_units = self.required(record, line, SalesColumn::Units)?;
        let units = raw_units
            .parse::<i64>()
            .ok()
            .filter(|u| (0..=MAX_UNITS).contains(u))
            .ok_or_else(|| {
                Error::validation(
                    self.source,
                    line,
                    format!(
                        "column 'units' value '{}' is not an integer between 0 and {}",
                        raw_units, MAX_UNITS
                    ),
                )
            })?;

        let state_id = self
            .optional(record, SalesColumn::StateId)
            .unwrap_or_else(|| state_from_store(&store_id));

        Ok(SalesRecord {
            store_id,
            state_id,
            item_id: self.optional(record, SalesColumn::ItemId),
            dept_id: self.optional(record, SalesColumn::DeptId),
            cat_id,
            date,
            sell_price,
            units,
        })
    }
}

/// Convert a csv error into our error type, keeping IO failures distinct.
fn map_csv_error(err: csv::Error, source: &str) -> Error {
    if err.is_io_error() {
        return match err.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            other => Error::other(format!("{:?}", other)),
        };
    }

    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => Error::validation(
            source,
            line,
            format!("expected {} fields, found {}", expected_len, len),
        ),
        csv::ErrorKind::Utf8 { .. } => Error::validation(source, line, "invalid UTF-8"),
        _ => Error::validation(source, line, err.to_string()),
    }
}

/// Whether every field of a record is empty after trimming.
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Parse every data row of a delimited stream.
///
/// `source` names the stream in error messages. An empty stream, or one with
/// a header but no data rows, yields no records. Lines holding only
/// whitespace are skipped.
pub fn parse_records<R: Read>(reader: R, source: &str, options: &LoadOptions) -> Result<Vec<SalesRecord>> {
    // Field counts are checked by hand so that whitespace-only lines can be
    // skipped instead of failing as one-field records.
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| map_csv_error(e, source))?
        .clone();

    if is_blank(&headers) {
        // A blank header is only an empty input if nothing follows it.
        for result in rdr.records() {
            let record = result.map_err(|e| map_csv_error(e, source))?;
            if !is_blank(&record) {
                return Err(Error::MissingColumn {
                    file: source.to_string(),
                    column: SalesColumn::StoreId.name().to_string(),
                });
            }
        }
        tracing::debug!("{} has no header, treating as empty", source);
        return Ok(Vec::new());
    }

    let parser = RowParser {
        source,
        columns: ColumnMap::from_headers(&headers, source)?,
        date_format: &options.date_format,
    };

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| map_csv_error(e, source))?;
        if is_blank(&record) {
            continue;
        }
        if record.len() != headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(Error::validation(
                source,
                line,
                format!("expected {} fields, found {}", headers.len(), record.len()),
            ));
        }
        records.push(parser.parse(&record)?);
    }

    Ok(records)
}

/// Read and validate one input file.
pub fn read_file(path: &Path, options: &LoadOptions) -> Result<FileRecords> {
    let source = path.display().to_string();
    let file = File::open(path)?;
    let records = parse_records(file, &source, options)?;
    let sha256 = hash::sha256_file(path)?;

    tracing::debug!("Parsed {} records from {}", records.len(), source);

    Ok(FileRecords {
        source: SourceFile {
            path: path.to_path_buf(),
            sha256,
            records: records.len() as u64,
        },
        records,
    })
}

/// Read and validate every input file named by `path`.
///
/// `path` may be a single file or a directory of data files.
pub fn read_records(path: &Path, options: &LoadOptions) -> Result<Vec<FileRecords>> {
    let files = fs_utils::collect_input_files(path)?;
    if files.is_empty() {
        tracing::warn!("No data files found under {}", path.display());
    }

    files.iter().map(|file| read_file(file, options)).collect()
}

/// Load the input into `store`, replacing any previous sales table.
pub fn load(
    store: &mut SalesStore,
    path: &Path,
    options: &LoadOptions,
    progress: &ProgressBar,
) -> Result<LoadSummary> {
    tracing::info!("Reading sales data from {}", path.display());
    let files = read_records(path, options)?;

    let mut sources = Vec::with_capacity(files.len());
    let mut records = Vec::new();
    for file in files {
        sources.push(file.source);
        records.extend(file.records);
    }

    let rows = store.replace_all(&records, progress)? as u64;
    tracing::info!("Loaded {} records from {} file(s)", rows, sources.len());

    Ok(LoadSummary { sources, rows })
}
