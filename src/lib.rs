// Main library entry point for cobtrace.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
