use anstream::println;
use clap::Parser;
use color_eyre::Result;
use dayz_version::steam;

use crate::commands::utils::SteamArgs;

/// Finds the executable of an installed DayZ build from Steam's library folders
#[derive(Parser)]
pub struct Locate {
    #[command(flatten)]
    steam: SteamArgs,
}

impl Locate {
    pub fn run(self) -> Result<()> {
        let app = self.steam.app()?;
        let path = steam::locate_executable(&self.steam.steam_root, app)?;
        println!("{path}");
        Ok(())
    }
}
