use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use color_eyre::Result;

use crate::Cli;

/// Outputs an autocompletion script for the given shell
#[derive(Parser)]
#[clap(visible_alias = "autocomplete")]
pub struct Complete {
    #[arg(value_enum)]
    shell: Shell,
}

impl Complete {
    pub fn run(self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        generate(
            self.shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut stdout,
        );
        stdout.flush()?;
        Ok(())
    }
}
