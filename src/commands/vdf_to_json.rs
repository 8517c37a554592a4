use std::{
    fs::{self, File},
    io::{self, Write},
};

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::Result;
use dayz_version::steam::vdf;

use crate::commands::utils::is_valid_file;

/// Converts a Steam VDF file, such as libraryfolders.vdf, to JSON
#[derive(Parser)]
pub struct VdfToJson {
    /// The VDF file to read. Reads from standard input if omitted
    #[arg(short, long, value_parser = is_valid_file, value_hint = clap::ValueHint::FilePath)]
    input: Option<Utf8PathBuf>,

    /// Where to write the JSON. Writes to standard output if omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<Utf8PathBuf>,
}

impl VdfToJson {
    pub fn run(self) -> Result<()> {
        let json = match &self.input {
            Some(input) => vdf::read_vdf_to_json(File::open(input)?)?,
            None => vdf::read_vdf_to_json(io::stdin().lock())?,
        };

        match &self.output {
            Some(output) => fs::write(output, json)?,
            None => {
                let mut stdout = anstream::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
