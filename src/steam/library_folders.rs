use camino::Utf8PathBuf;
use indexmap::IndexMap;
use tracing::{debug, trace};

use super::{LocateError, SteamApp, vdf, vdf::LibraryNode};

/// The library folders declared in a `libraryfolders.vdf` file, in file order.
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryFolders(IndexMap<String, LibraryNode>);

impl LibraryFolders {
    const ROOT_KEY: &'static str = "libraryfolders";

    const APPS_KEY: &'static str = "apps";

    const PATH_KEY: &'static str = "path";

    /// Parses the contents of a `libraryfolders.vdf` file.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::VdfLoad`] if the text can't be converted and
    /// [`LocateError::MissingKey`] if it has no `libraryfolders` object.
    pub fn from_vdf(text: &str) -> Result<Self, LocateError> {
        let tree = vdf::parse(text).map_err(LocateError::VdfLoad)?;

        match tree.get(Self::ROOT_KEY) {
            Some(LibraryNode::Object(folders)) => Ok(Self(folders.clone())),
            _ => Err(LocateError::MissingKey(Self::ROOT_KEY)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path of the first library folder that lists `app_id` among its apps.
    ///
    /// Entries that aren't objects, and folders without an `apps` object, are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::AppNotInstalled`] if no folder lists the app and
    /// [`LocateError::MissingKey`] if the folder that lists it has no `path`.
    pub fn library_path(&self, app_id: u32) -> Result<&str, LocateError> {
        let app_key = app_id.to_string();

        for (key, folder) in &self.0 {
            let Some(apps) = folder.get(Self::APPS_KEY).and_then(LibraryNode::as_object) else {
                trace!(key, "Skipping library folder without apps");
                continue;
            };

            if apps.contains_key(&app_key) {
                let path = folder
                    .get(Self::PATH_KEY)
                    .and_then(LibraryNode::as_str)
                    .ok_or(LocateError::MissingKey(Self::PATH_KEY))?;
                debug!(key, path, app_id, "Found app in library folder");
                return Ok(path);
            }
        }

        Err(LocateError::AppNotInstalled(app_id))
    }

    /// Builds the path the app's executable would have in its library folder.
    ///
    /// The library path is used exactly as written in the file, so a Windows library yields a
    /// path like `C:\SteamLibrary/steamapps/common/DayZ/DayZ_x64.exe`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::library_path`].
    pub fn executable_path(&self, app: SteamApp) -> Result<Utf8PathBuf, LocateError> {
        self.library_path(app.id()).map(|library| {
            Utf8PathBuf::from(format!(
                "{library}/steamapps/common/{}/{}",
                app.directory_name(),
                SteamApp::EXECUTABLE
            ))
        })
    }
}
