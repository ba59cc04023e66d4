//! CLI subcommand implementations.

pub mod calc;
pub mod kinds;
pub mod run;
pub mod util;
