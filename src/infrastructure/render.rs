//! Call tree renderers: indented text, JSON, and Graphviz DOT.

use crate::domain::calltree::CallTree;
use crate::ports::TreeRenderer;
use anyhow::{Context, Result};
use std::collections::HashSet;

/// Indented text rendering, depth-first pre-order: `- <name>` with
/// ` (Uses EXEC SQL)` appended for flagged paragraphs, two extra spaces of
/// indent per depth level.
pub struct TextRenderer;

impl TreeRenderer for TextRenderer {
    fn render(&self, tree: &CallTree) -> Result<String> {
        let mut out = String::new();
        Self::render_node(tree, 0, &mut out);
        Ok(out)
    }
}

impl TextRenderer {
    fn render_node(node: &CallTree, indent: usize, out: &mut String) {
        for _ in 0..indent {
            out.push(' ');
        }
        out.push_str("- ");
        out.push_str(&node.name);
        if node.uses_sql {
            out.push_str(" (Uses EXEC SQL)");
        }
        out.push('\n');
        for child in &node.children {
            Self::render_node(child, indent + 2, out);
        }
    }
}

/// Pretty-printed JSON rendering of the serialized tree.
pub struct JsonRenderer;

impl TreeRenderer for JsonRenderer {
    fn render(&self, tree: &CallTree) -> Result<String> {
        serde_json::to_string_pretty(tree).context("Failed to serialize call tree as JSON")
    }
}

/// Graphviz DOT rendering. Tree nodes sharing a paragraph name collapse into
/// one graph node; SQL-flagged paragraphs are highlighted.
pub struct DotRenderer;

impl TreeRenderer for DotRenderer {
    fn render(&self, tree: &CallTree) -> Result<String> {
        let mut lines = Vec::new();
        lines.push("digraph PerformTree {".to_string());
        lines.push("    rankdir=TB;".to_string());
        lines.push("    node [fontname=\"Helvetica\", fontsize=12, shape=box];".to_string());
        lines.push("".to_string());

        let mut seen_nodes = HashSet::new();
        let mut seen_edges = HashSet::new();
        Self::collect(tree, &mut lines, &mut seen_nodes, &mut seen_edges);

        lines.push("}".to_string());
        Ok(lines.join("\n"))
    }
}

impl DotRenderer {
    fn collect(
        node: &CallTree,
        lines: &mut Vec<String>,
        seen_nodes: &mut HashSet<String>,
        seen_edges: &mut HashSet<(String, String)>,
    ) {
        if seen_nodes.insert(node.name.clone()) {
            let (fill, border) = if node.uses_sql {
                ("#f38ba8", "#d20f39") // Red: uses EXEC SQL
            } else {
                ("#89b4fa", "#1e66f5") // Blue: plain paragraph
            };
            lines.push(format!(
                "    \"{}\" [label=\"{}\", style=\"filled\", fillcolor=\"{}\", color=\"{}\"];",
                Self::escape(&node.name),
                Self::escape(&node.name),
                fill,
                border
            ));
        }

        for child in &node.children {
            let edge = (node.name.clone(), child.name.clone());
            if seen_edges.insert(edge) {
                lines.push(format!(
                    "    \"{}\" -> \"{}\";",
                    Self::escape(&node.name),
                    Self::escape(&child.name)
                ));
            }
            Self::collect(child, lines, seen_nodes, seen_edges);
        }
    }

    fn escape(label: &str) -> String {
        label.replace('\\', "\\\\").replace('"', "\\\"")
    }
}
