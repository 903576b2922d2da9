// Domain types and analysis passes for cobtrace.

pub mod callgraph;
pub mod calltree;
pub mod scanner;
