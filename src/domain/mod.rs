//! Domain types for manual page generation
//!
//! Contains header metadata, the command tree capability and the error
//! taxonomy, without any I/O concerns.

mod command;
mod error;
mod header;

pub use command::CommandNode;
pub use error::ManpageError;
pub use header::{ManpageHeader, FIXED_DATE, PROGRAM_TITLE, SECTION, SOURCE};
