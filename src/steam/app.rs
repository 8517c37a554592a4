use derive_more::Display;

use super::LocateError;

/// The Steam apps whose executables can be located.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum SteamApp {
    #[display("DayZ")]
    DayZ,
    #[display("DayZ Experimental")]
    DayZExperimental,
}

impl SteamApp {
    /// The executable both apps ship, relative to their install directory.
    pub const EXECUTABLE: &'static str = "DayZ_x64.exe";

    pub const ALL: [Self; 2] = [Self::DayZ, Self::DayZExperimental];

    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::DayZ => 221_100,
            Self::DayZExperimental => 1_024_020,
        }
    }

    /// The directory under `steamapps/common` that the app is installed to.
    #[must_use]
    pub const fn directory_name(self) -> &'static str {
        match self {
            Self::DayZ => "DayZ",
            Self::DayZExperimental => "DayZ Exp",
        }
    }

    /// The name of the game build, as shown to the player.
    #[must_use]
    pub const fn build_name(self) -> &'static str {
        match self {
            Self::DayZ => "DayZ",
            Self::DayZExperimental => "DayZ Experimental",
        }
    }
}

impl TryFrom<u32> for SteamApp {
    type Error = LocateError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|app| app.id() == id)
            .ok_or(LocateError::UnknownApp(id))
    }
}
