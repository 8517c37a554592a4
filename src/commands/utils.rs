use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use color_eyre::{Result, eyre::bail};
use dayz_version::{pe::resource::EntryScan, steam::SteamApp};

#[derive(Args)]
pub struct SteamArgs {
    /// The Steam app id of the build to look up
    #[arg(long, default_value_t = SteamApp::DayZ.id(), value_parser = is_known_app)]
    pub app_id: u32,

    /// The Steam installation directory that contains `steamapps`
    #[arg(long, env = "STEAM_ROOT", value_hint = clap::ValueHint::DirPath)]
    pub steam_root: Utf8PathBuf,
}

impl SteamArgs {
    pub fn app(&self) -> Result<SteamApp> {
        Ok(SteamApp::try_from(self.app_id)?)
    }
}

#[derive(Args)]
pub struct ScanArgs {
    /// Look at every entry of the resource root instead of stopping once the version type has
    /// been passed
    #[arg(long)]
    pub scan_all_entries: bool,
}

impl ScanArgs {
    pub const fn entry_scan(&self) -> EntryScan {
        if self.scan_all_entries {
            EntryScan::Exhaustive
        } else {
            EntryScan::Sorted
        }
    }
}

fn is_known_app(id: &str) -> Result<u32> {
    let id = id.parse::<u32>()?;
    SteamApp::try_from(id)?;
    Ok(id)
}

pub fn is_valid_file(path: &str) -> Result<Utf8PathBuf> {
    let path = Utf8Path::new(path);
    if !path.exists() {
        bail!("{path} does not exist")
    }
    if !path.is_file() {
        bail!("{path} is not a file")
    }
    Ok(path.to_path_buf())
}
