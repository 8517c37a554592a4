use anstream::println;
use clap::Parser;
use color_eyre::Result;
use dayz_version::{check, version::VersionMatch};
use owo_colors::OwoColorize;

use crate::commands::utils::{ScanArgs, SteamArgs};

/// Compares the installed version of a DayZ build against a server's version
#[derive(Parser)]
pub struct Compare {
    /// The version the server reports, such as 1.27.159040
    remote: String,

    #[command(flatten)]
    steam: SteamArgs,

    #[command(flatten)]
    scan: ScanArgs,
}

impl Compare {
    pub fn run(self) -> Result<()> {
        let app = self.steam.app()?;
        let outcome = check::check(
            self.remote,
            app,
            &self.steam.steam_root,
            self.scan.entry_scan(),
        );

        if let Some(path) = &outcome.path {
            println!("{}: {}", outcome.build_name(), path.blue());
        }
        if let Some(local) = outcome.local {
            println!("Installed: {local}");
        }
        println!("Server: {}", outcome.remote);

        match outcome.status {
            VersionMatch::SameVersion => println!("{}", outcome.status.green()),
            VersionMatch::LocalOlder | VersionMatch::LocalNewer => {
                println!("{}", outcome.status.yellow());
            }
            VersionMatch::Fail => {
                println!("{}", outcome.status.red());
            }
        }

        match outcome.error {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}
