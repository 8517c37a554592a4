use anstream::println;
use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::Result;
use dayz_version::pe;
use owo_colors::OwoColorize;

use crate::commands::utils::{ScanArgs, is_valid_file};

/// Reads the version embedded in a DayZ executable
#[derive(Parser)]
pub struct ReadVersion {
    #[arg(value_parser = is_valid_file, value_hint = clap::ValueHint::FilePath)]
    file_path: Utf8PathBuf,

    /// Also print the raw four-part file version
    #[arg(long)]
    raw: bool,

    #[command(flatten)]
    scan: ScanArgs,
}

impl ReadVersion {
    pub fn run(self) -> Result<()> {
        let file_version = pe::read_file_version_with(&self.file_path, self.scan.entry_scan())?;
        println!(
            "{} {}",
            self.file_path.blue(),
            file_version.dayz_version().green()
        );
        if self.raw {
            println!("File version: {file_version}");
        }
        Ok(())
    }
}
