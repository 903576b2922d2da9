//! PERFORM Call Tree
//!
//! Rooted, cycle-truncated expansion of the call graph from a chosen start
//! paragraph, plus the EXEC SQL reachability check.

use crate::domain::callgraph::CallGraph;
use serde::Serialize;
use std::collections::HashSet;

/// A node in the PERFORM call tree. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct CallTree {
    pub name: String,
    pub uses_sql: bool,
    pub children: Vec<CallTree>,
}

impl CallTree {
    /// Build the call tree rooted at `start`.
    ///
    /// The visited set is owned here and shared across the entire build, so
    /// a paragraph expanded in one branch is truncated when a later sibling
    /// branch reaches it again. Start names that were never defined as
    /// paragraphs yield a single leaf with `uses_sql` false.
    pub fn build(graph: &CallGraph, start: &str) -> CallTree {
        let mut visited = HashSet::new();
        Self::build_node(graph, start, &mut visited)
    }

    fn build_node(graph: &CallGraph, name: &str, visited: &mut HashSet<String>) -> CallTree {
        if visited.contains(name) {
            // Truncate recursion but keep the flag, so reachability stays
            // correct at the cycle boundary.
            return CallTree {
                name: name.to_string(),
                uses_sql: graph.uses_sql(name),
                children: Vec::new(),
            };
        }
        visited.insert(name.to_string());

        let children = graph
            .calls_for(name)
            .iter()
            .map(|callee| Self::build_node(graph, callee, visited))
            .collect();

        CallTree {
            name: name.to_string(),
            uses_sql: graph.uses_sql(name),
            children,
        }
    }

    /// True if this node or any reachable child uses EXEC SQL.
    pub fn contains_sql(&self) -> bool {
        self.uses_sql || self.children.iter().any(CallTree::contains_sql)
    }
}
