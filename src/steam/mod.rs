mod app;
mod library_folders;
pub mod vdf;

use std::{fs, io};

pub use app::SteamApp;
use camino::{Utf8Path, Utf8PathBuf};
pub use library_folders::LibraryFolders;
use thiserror::Error;
use tracing::debug;
use vdf::VdfError;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("Unknown Steam app id {0}")]
    UnknownApp(u32),
    #[error("Failed to find a libraryfolder for the appid '{0}'")]
    AppNotInstalled(u32),
    #[error("Path '{0}' specified in libraryfolders does not exist")]
    AppMoved(Utf8PathBuf),
    #[error("Failed to parse libraryfolders")]
    VdfLoad(#[source] VdfError),
    #[error("libraryfolders has no '{0}' key")]
    MissingKey(&'static str),
    #[error("Failed to read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The library folder manifest, relative to the Steam root.
pub const LIBRARY_FOLDERS_PATH: &str = "steamapps/libraryfolders.vdf";

/// Finds the executable of `app` through the library folders of the Steam install at
/// `steam_root`.
///
/// # Errors
///
/// Returns [`LocateError::Io`] if `libraryfolders.vdf` can't be read, [`LocateError::AppMoved`]
/// if the executable it leads to doesn't exist, and the errors of [`LibraryFolders::from_vdf`]
/// and [`LibraryFolders::executable_path`] otherwise.
pub fn locate_executable(steam_root: &Utf8Path, app: SteamApp) -> Result<Utf8PathBuf, LocateError> {
    let vdf_path = steam_root.join(LIBRARY_FOLDERS_PATH);
    debug!(%vdf_path, %app, "Reading library folders");

    let text = fs::read_to_string(&vdf_path).map_err(|source| LocateError::Io {
        path: vdf_path,
        source,
    })?;

    let executable = LibraryFolders::from_vdf(&text)?.executable_path(app)?;
    if !executable.exists() {
        return Err(LocateError::AppMoved(executable));
    }

    debug!(%executable, "Located executable");
    Ok(executable)
}
