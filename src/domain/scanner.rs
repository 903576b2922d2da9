//! COBOL Section Scanner
//!
//! Single linear pass over source lines. Detects paragraph headers, PERFORM
//! statements, and EXEC SQL constructs with line-based pattern matching; no
//! COBOL grammar parsing is involved.

use crate::domain::callgraph::CallGraph;
use regex::Regex;

/// Line-based scanner producing a [`CallGraph`] from COBOL source text.
///
/// The scanner carries no state between calls; the only state during a scan
/// is the current paragraph name. It accepts arbitrary text and never fails:
/// malformed or binary input just yields a sparse or empty graph.
pub struct CobolScanner {
    re_paragraph: Regex,
    re_perform: Regex,
    re_exec_sql: Regex,
}

impl CobolScanner {
    pub fn new() -> Self {
        Self {
            // Paragraph header: 3-digit code, hyphen, word/hyphen run at
            // line start. The rest of the line (e.g. the closing period)
            // is ignored.
            re_paragraph: Regex::new(r"^(\d{3}-[\w-]+)").unwrap(),
            re_perform: Regex::new(r"PERFORM\s+([\w-]+)").unwrap(),
            re_exec_sql: Regex::new(r"(?i)EXEC\s+SQL").unwrap(),
        }
    }

    /// Scan source text into a call graph.
    ///
    /// Per trimmed line, three checks in order: a header line opens a new
    /// paragraph and is never itself treated as a PERFORM or SQL line; with
    /// a current paragraph set, a line starting with `PERFORM` records its
    /// target, and any line matching `EXEC SQL` (case-insensitive) marks the
    /// paragraph. Lines before the first header have no effect.
    pub fn scan(&self, source: &str) -> CallGraph {
        let mut graph = CallGraph::default();
        let mut current: Option<String> = None;

        for line in source.lines() {
            let trimmed = line.trim();

            if let Some(caps) = self.re_paragraph.captures(trimmed) {
                let name = caps[1].to_string();
                graph.begin_paragraph(&name);
                current = Some(name);
                continue;
            }

            if let Some(name) = current.as_deref() {
                if trimmed.starts_with("PERFORM") {
                    // Bare "PERFORM" with no target contributes nothing.
                    if let Some(caps) = self.re_perform.captures(trimmed) {
                        graph.record_call(name, &caps[1]);
                    }
                }

                if self.re_exec_sql.is_match(trimmed) {
                    graph.mark_sql(name);
                }
            }
        }

        graph
    }
}

impl Default for CobolScanner {
    fn default() -> Self {
        Self::new()
    }
}
