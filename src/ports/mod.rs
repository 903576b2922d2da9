use crate::domain::calltree::CallTree;
use anyhow::Result;

/// Renders a built call tree into an output format.
pub trait TreeRenderer {
    fn render(&self, tree: &CallTree) -> Result<String>;
}
