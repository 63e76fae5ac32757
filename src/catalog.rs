// ===== letterdraw/src/catalog.rs =====
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;
use tracing::{debug, info};

/// One data row. Field names are shared with every other record of the
/// same catalog, values keep header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    /// Exact, case-sensitive lookup. With duplicate header names the last
    /// column wins.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.headers
            .iter()
            .rposition(|h| h == field)
            .map(|i| self.values[i].as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .zip(self.values.iter())
            .map(|(h, v)| (h.as_str(), v.as_str()))
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (k, v) in self.fields() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The parsed dataset. Read-only once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    headers: Arc<[String]>,
    records: Vec<Record>,
    dropped: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            headers: Arc::from(Vec::new()),
            records: Vec::new(),
            dropped: 0,
        }
    }
}

impl Catalog {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Rows skipped because their field count did not match the header.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Splits one data line on commas. A double quote flips the "inside quotes"
/// state and is never emitted; commas inside quotes are content. Tokens are
/// trimmed. An unterminated quote just swallows the rest of the line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Parses the raw dataset text. The first line is the header (plain comma
/// split), every later non-blank line becomes a record if it has exactly
/// as many fields as the header. A leading byte-order mark is ignored.
pub fn parse(raw: &str) -> Catalog {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw.split('\n');

    let headers: Arc<[String]> = match lines.next() {
        Some(header) => header.split(',').map(|h| h.trim().to_string()).collect(),
        None => Arc::from(Vec::new()),
    };

    let mut records = Vec::new();
    let mut dropped = 0;

    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let values = split_line(line);
        if values.len() != headers.len() {
            dropped += 1;
            debug!(
                "Skipping line {}: {} fields, header has {}",
                idx + 2,
                values.len(),
                headers.len()
            );
            continue;
        }

        records.push(Record {
            headers: Arc::clone(&headers),
            values,
        });
    }

    if dropped > 0 {
        debug!("Dropped {} malformed rows", dropped);
    }
    info!("Loaded {} items", records.len());

    Catalog {
        headers,
        records,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_quoted_comma() {
        assert_eq!(split_line(r#"Apple,"a,b", c "#), vec!["Apple", "a,b", "c"]);
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert_eq!(split_line(r#"x,"open,still open"#), vec!["x", "open,still open"]);
    }

    #[test]
    fn test_get_last_duplicate_wins() {
        let cat = parse("name,name\nfirst,second\n");
        assert_eq!(cat.records()[0].get("name"), Some("second"));
    }
}
