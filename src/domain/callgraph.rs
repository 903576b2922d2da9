// Call graph structures for cobtrace.
// Represents PERFORM relationships between COBOL paragraphs.

use std::collections::HashMap;

/// The intra-file call graph produced by one scanner pass: for every
/// paragraph, the PERFORM targets it names (in source order, duplicates
/// kept) and whether its body contains an EXEC SQL construct.
///
/// Lookups are total over all strings: a name that was never defined as a
/// paragraph simply has no calls and no SQL usage. PERFORM targets that
/// point at undefined paragraphs are kept as-is.
#[derive(Debug, Default, Clone)]
pub struct CallGraph {
    order: Vec<String>,
    calls: HashMap<String, Vec<String>>,
    sql: HashMap<String, bool>,
}

impl CallGraph {
    /// Register a paragraph header. Resets the call list and SQL flag if the
    /// same name is declared again; first-occurrence position is kept.
    pub fn begin_paragraph(&mut self, name: &str) {
        if !self.calls.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.calls.insert(name.to_string(), Vec::new());
        self.sql.insert(name.to_string(), false);
    }

    /// Append a PERFORM target to a defined paragraph's call list.
    pub fn record_call(&mut self, from: &str, to: &str) {
        if let Some(list) = self.calls.get_mut(from) {
            list.push(to.to_string());
        }
    }

    /// Mark a defined paragraph as containing EXEC SQL. Idempotent; the flag
    /// never resets within a scan.
    pub fn mark_sql(&mut self, name: &str) {
        if let Some(flag) = self.sql.get_mut(name) {
            *flag = true;
        }
    }

    /// Paragraph names in first-occurrence order.
    pub fn paragraphs(&self) -> &[String] {
        &self.order
    }

    /// Whether a name was seen as a paragraph header.
    pub fn is_defined(&self, name: &str) -> bool {
        self.calls.contains_key(name)
    }

    /// PERFORM targets recorded for a paragraph; empty for undefined names.
    pub fn calls_for(&self, name: &str) -> &[String] {
        self.calls.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a paragraph contains EXEC SQL; false for undefined names.
    pub fn uses_sql(&self, name: &str) -> bool {
        self.sql.get(name).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
