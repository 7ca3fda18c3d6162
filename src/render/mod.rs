//! # Rendering Layer
//!
//! Turns command trees into manual pages and writes them out.
//!
//! ## Operations
//!
//! | Operation | Destination | Output |
//! |-----------|-------------|--------|
//! | [`Renderer::write_tree`] | Directory (created if absent) | One page per command |
//! | [`Renderer::write_one`] | Any byte stream | A single page |
//!
//! Page layout belongs entirely to the renderer; callers only supply the
//! command and a [`ManpageHeader`].

mod roff;

use std::io::{self, Write};
use std::path::Path;

use crate::domain::{CommandNode, ManpageHeader};

pub use roff::RoffRenderer;

/// Writes manual pages for a command tree
pub trait Renderer {
    type Command: CommandNode;

    /// Writes a page for `root` and every command below it into `dir`
    fn write_tree(&self, root: &Self::Command, header: &ManpageHeader, dir: &Path) -> io::Result<()>;

    /// Writes the page for a single command to `out`
    fn write_one(
        &self,
        command: &Self::Command,
        header: &ManpageHeader,
        out: &mut dyn Write,
    ) -> io::Result<()>;
}
