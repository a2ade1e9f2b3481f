//! Include/exclude table filtering.

/// Which tables take part in a run.
///
/// Entries are either a bare table name, matching that table in every
/// schema, or `schema.table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFilter {
    /// Every table.
    All,
    /// Only the listed tables.
    Include(Vec<String>),
    /// Every table except the listed ones.
    Exclude(Vec<String>),
}

impl TableFilter {
    /// Whether `schema.table` passes the filter.
    pub fn allows(&self, schema: &str, table: &str) -> bool {
        match self {
            TableFilter::All => true,
            TableFilter::Include(entries) => matches_any(entries, schema, table),
            TableFilter::Exclude(entries) => !matches_any(entries, schema, table),
        }
    }

    /// Entries that match none of `tables` (given as `(schema, table)`).
    pub fn unmatched<'a>(&'a self, tables: &[(&str, &str)]) -> Vec<&'a str> {
        let entries = match self {
            TableFilter::All => return Vec::new(),
            TableFilter::Include(entries) | TableFilter::Exclude(entries) => entries,
        };
        entries
            .iter()
            .filter(|entry| {
                !tables
                    .iter()
                    .any(|(schema, table)| matches_entry(entry, schema, table))
            })
            .map(String::as_str)
            .collect()
    }
}

fn matches_any(entries: &[String], schema: &str, table: &str) -> bool {
    entries
        .iter()
        .any(|entry| matches_entry(entry, schema, table))
}

fn matches_entry(entry: &str, schema: &str, table: &str) -> bool {
    match entry.split_once('.') {
        Some((s, t)) => s == schema && t == table,
        None => entry == table,
    }
}
