/// Command-line parsing and request handling
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display for repeated runs
pub mod progress;
/// Terminal board rendering
pub mod render;
/// Plain-text placement format
pub mod text;
