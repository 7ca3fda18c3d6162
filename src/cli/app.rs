//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::manpage::{self, ManpageOptions};
use super::output::Output;

#[derive(Parser)]
#[command(name = "mangen")]
#[command(author, version, about = "Generate reference manual pages for this program")]
#[command(propagate_version = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Suppress informational messages
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate manual pages
    #[command(long_about = "\
Generate a manual page for a single command and write it to stdout.

If --output-dir is set, the manual pages for all commands are written to that
directory instead and no command needs to be given.")]
    Manpage {
        #[command(flatten)]
        options: ManpageOptions,

        /// Command to generate the manual page for
        #[arg(value_name = "command")]
        command: Vec<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.quiet, cli.verbose);

    output.verbose("mangen starting");

    match cli.command {
        Commands::Manpage { options, command } => {
            output.verbose_ctx(
                "manpage",
                &format!("output_dir={:?}, args={:?}", options.output_dir, command),
            );
            manpage::run(&options, &command, &output)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
