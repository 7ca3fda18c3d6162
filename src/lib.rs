//! mangen - deterministic manual pages for a command-line program
//!
//! The `manpage` command writes either every page of the program's command
//! tree into a directory, or a single top-level command's page to stdout.
//! Rendering is delegated to a [`render::Renderer`]; the shipped
//! [`render::RoffRenderer`] is backed by `clap_mangen`.

pub mod domain;
pub mod render;
pub mod cli;

pub use domain::{CommandNode, ManpageError, ManpageHeader};
