//! # Command-Line Interface
//!
//! User-facing CLI commands and output helpers.
//!
//! ## Commands
//!
//! | Command | Purpose | Examples |
//! |---------|---------|----------|
//! | `manpage` | Manual page generation | `manpage manpage`, `manpage --output-dir man/` |
//!
//! ## Verbosity
//!
//! Use `--quiet` (or `-q`) to silence notices and `--verbose` (or `-v`)
//! for debug output on stderr:
//! ```bash
//! mangen --verbose manpage --output-dir target/man
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod manpage;
mod output;

pub use app::{run, Cli, Commands};
pub use manpage::{ManpageGenerator, ManpageOptions};
pub use output::Output;
