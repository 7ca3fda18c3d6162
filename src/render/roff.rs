//! Roff manual pages rendered with `clap_mangen`

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Command;
use clap_mangen::Man;

use super::Renderer;
use crate::domain::ManpageHeader;

/// Renders `clap` commands as roff pages
#[derive(Debug, Clone, Copy, Default)]
pub struct RoffRenderer;

impl RoffRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Returns the file name used for a command's page, e.g. `mangen-manpage.1`
    pub fn page_filename(command: &Command, header: &ManpageHeader) -> String {
        let name = command.get_display_name().unwrap_or_else(|| command.get_name());
        format!("{}.{}", name, header.section)
    }

    fn page(command: &Command, header: &ManpageHeader) -> Man {
        Man::new(command.clone())
            .title(header.title.as_str())
            .section(header.section.as_str())
            .date(header.date_string())
            .source(header.source.as_str())
    }

    fn write_pages(command: &Command, header: &ManpageHeader, dir: &Path) -> io::Result<()> {
        let path: PathBuf = dir.join(Self::page_filename(command, header));
        let mut file = BufWriter::new(File::create(&path)?);
        Self::page(command, header).render(&mut file)?;
        file.flush()?;

        for sub in command.get_subcommands().filter(|s| has_page(command, s)) {
            Self::write_pages(sub, header, dir)?;
        }

        Ok(())
    }
}

/// Hidden commands and the `help` subcommand clap generates get no page
fn has_page(parent: &Command, command: &Command) -> bool {
    let generated_help = !parent.is_disable_help_subcommand_set() && command.get_name() == "help";
    !command.is_hide_set() && !generated_help
}

impl Renderer for RoffRenderer {
    type Command = Command;

    fn write_tree(&self, root: &Command, header: &ManpageHeader, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;

        // Building assigns hyphenated display names to subcommands
        let mut root = root.clone();
        root.build();

        Self::write_pages(&root, header, dir)
    }

    fn write_one(&self, command: &Command, header: &ManpageHeader, out: &mut dyn Write) -> io::Result<()> {
        Self::page(command, header).render(out)?;
        out.flush()
    }
}
