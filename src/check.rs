use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    pe::{self, PeError, resource::EntryScan},
    steam::{self, LocateError, SteamApp},
    version::{self, DayZVersion, ParseVersionError, VersionMatch},
};

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error("Failed to read the version of {path}")]
    Pe {
        path: Utf8PathBuf,
        #[source]
        source: PeError,
    },
    #[error("Invalid server version {remote:?}")]
    RemoteVersion {
        remote: String,
        #[source]
        source: ParseVersionError,
    },
}

/// The outcome of checking the installed version of an app against a server's version.
///
/// Whatever was resolved before a failure is kept, so a failed check still reports the
/// executable path once it was found and the local version once it was read.
#[derive(Debug)]
pub struct VersionCheck {
    pub app: SteamApp,
    /// The version string the server reported.
    pub remote: String,
    pub local: Option<DayZVersion>,
    pub path: Option<Utf8PathBuf>,
    pub status: VersionMatch,
    /// Set exactly when `status` is [`VersionMatch::Fail`].
    pub error: Option<CheckError>,
}

impl VersionCheck {
    #[inline]
    pub const fn build_name(&self) -> &'static str {
        self.app.build_name()
    }

    #[inline]
    pub const fn is_match(&self) -> bool {
        self.status.is_match()
    }

    fn fail(mut self, error: CheckError) -> Self {
        warn!(app = %self.app, %error, "Version check failed");
        self.status = VersionMatch::Fail;
        self.error = Some(error);
        self
    }
}

/// Locates the installed executable of `app` under `steam_root`, reads its version and compares
/// it with `remote`.
///
/// Failures don't return early as errors: they are recorded in the returned [`VersionCheck`] with
/// a status of [`VersionMatch::Fail`].
pub fn check<S: Into<String>>(
    remote: S,
    app: SteamApp,
    steam_root: &Utf8Path,
    scan: EntryScan,
) -> VersionCheck {
    let outcome = VersionCheck {
        app,
        remote: remote.into(),
        local: None,
        path: None,
        status: VersionMatch::Fail,
        error: None,
    };

    let path = match steam::locate_executable(steam_root, app) {
        Ok(path) => path,
        Err(error) => return outcome.fail(error.into()),
    };
    let outcome = VersionCheck {
        path: Some(path.clone()),
        ..outcome
    };

    let local = match pe::read_dayz_version_with(&path, scan) {
        Ok(local) => local,
        Err(source) => return outcome.fail(CheckError::Pe { path, source }),
    };
    let outcome = VersionCheck {
        local: Some(local),
        ..outcome
    };

    let remote = match outcome.remote.parse::<DayZVersion>() {
        Ok(remote) => remote,
        Err(source) => {
            let remote = outcome.remote.clone();
            return outcome.fail(CheckError::RemoteVersion { remote, source });
        }
    };

    let status = version::compare(local, remote);
    debug!(%local, %remote, ?status, "Compared versions");

    VersionCheck { status, ..outcome }
}
