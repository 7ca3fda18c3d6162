//! Manual page generation command
//!
//! Writes either every page of the command tree into a directory, or the
//! page of one top-level command to stdout.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::{Args, CommandFactory};

use super::app::Cli;
use super::output::Output;
use crate::domain::{CommandNode, ManpageError, ManpageHeader};
use crate::render::{Renderer, RoffRenderer};

/// Options for the `manpage` command
#[derive(Debug, Clone, Default, Args)]
pub struct ManpageOptions {
    /// Write man pages to this directory
    #[arg(long, value_name = "directory", default_value_t = String::new(), hide_default_value = true)]
    pub output_dir: String,
}

impl ManpageOptions {
    pub fn with_output_dir(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

/// Validates arguments and dispatches to a [`Renderer`]
pub struct ManpageGenerator<R> {
    renderer: R,
}

impl<R: Renderer> ManpageGenerator<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Generates pages for `tree`.
    ///
    /// With an output directory set, the whole tree is written there and
    /// `args` are ignored. Otherwise `args` must name exactly one direct
    /// child of `tree`, whose page is written to `out`.
    pub fn run(
        &self,
        options: &ManpageOptions,
        args: &[String],
        tree: &R::Command,
        out: &mut dyn Write,
        output: &Output,
    ) -> Result<(), ManpageError> {
        let header = ManpageHeader::fixed()?;

        let dir = options.output_dir.as_str();
        if !dir.is_empty() {
            output.info(&format!("writing man pages to directory {}", dir));
            return Ok(self.renderer.write_tree(tree, &header, Path::new(dir))?);
        }

        let name = match args {
            [] => return Err(ManpageError::usage("no command given")),
            [name] => name,
            _ => {
                return Err(ManpageError::usage(format!(
                    "more than one command given: [{}]",
                    args.join(" ")
                )))
            }
        };

        output.verbose_ctx("manpage", &format!("Looking up command: {}", name));

        match tree.find_child(name) {
            Some(command) => Ok(self.renderer.write_one(command, &header, out)?),
            None => Err(ManpageError::usage(format!("command {:?} is not known", name))),
        }
    }
}

/// Runs the `manpage` command against this program's own command tree
pub fn run(options: &ManpageOptions, args: &[String], output: &Output) -> Result<()> {
    let mut tree = Cli::command();
    tree.build();
    output.verbose_ctx(
        "manpage",
        &format!("Command tree has {} top-level commands", tree.children().count()),
    );

    let generator = ManpageGenerator::new(RoffRenderer::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generator.run(options, args, &tree, &mut out, output)?;

    Ok(())
}
