use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::AppResult;

/// One data record keyed by trimmed header name, in header order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new<K, V, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of the named column, if this record carries it
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }
}

/// Parses comma-separated bytes whose first line is the header
///
/// Blank lines are skipped. A record shorter than the header only carries the columns it
/// has; cells beyond the last header are dropped. Text that is not valid UTF-8 fails the
/// whole document.
pub fn parse_rows(bytes: &[u8]) -> AppResult<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut ragged = 0usize;

    for record in reader.records() {
        let record = record?;

        if is_blank(&record) {
            skipped += 1;
            continue;
        }

        if record.len() != headers.len() {
            ragged += 1;
        }

        rows.push(Row::new(
            headers.iter().cloned().zip(record.iter().map(str::to_string)),
        ));
    }

    tracing::debug!(rows = rows.len(), skipped, ragged, "Parsed tabular text");

    Ok(rows)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
