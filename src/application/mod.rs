use crate::domain::calltree::CallTree;
use crate::domain::scanner::CobolScanner;
use crate::ports::TreeRenderer;
use anyhow::Result;

/// Outcome of one analysis run.
pub struct AnalysisReport {
    pub tree: CallTree,
    pub rendered: String,
    pub contains_sql: bool,
}

pub struct AnalyzeUsecase<'a> {
    pub scanner: &'a CobolScanner,
    pub renderer: &'a dyn TreeRenderer,
}

impl<'a> AnalyzeUsecase<'a> {
    /// Scan the source, build the call tree from `start`, render it, and
    /// answer the EXEC SQL reachability question.
    pub fn run(&self, source: &str, start: &str) -> Result<AnalysisReport> {
        let graph = self.scanner.scan(source);
        let tree = CallTree::build(&graph, start);
        let rendered = self.renderer.render(&tree)?;
        let contains_sql = tree.contains_sql();
        Ok(AnalysisReport {
            tree,
            rendered,
            contains_sql,
        })
    }
}
