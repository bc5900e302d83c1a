//! Interactive terminal front end for the admission engine.

pub mod io;
pub mod output;
pub mod sections;

mod shell;

pub use shell::run_cli;
