//! Command-line front end: edge-spec parsing and one function per subcommand.

pub mod commands;
