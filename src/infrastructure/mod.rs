// Infrastructure implementations for cobtrace.

pub mod render;
pub mod source_reader;

pub use render::{DotRenderer, JsonRenderer, TextRenderer};
pub use source_reader::{read_source, resolve_path};
