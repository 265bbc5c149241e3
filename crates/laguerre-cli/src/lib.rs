//! Library side of the `laguerre` command-line tool.

pub mod config;
pub mod logging;
pub mod plot;
pub mod repl;
pub mod table;
pub mod terminal;
