use std::fmt;

/// The predefined resource types that can appear at the root of a resource tree.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum ResourceType {
    Cursor = 1,
    Bitmap = 2,
    Icon = 3,
    Menu = 4,
    Dialog = 5,
    String = 6,
    FontDirectory = 7,
    Font = 8,
    Accelerator = 9,
    RCData = 10,
    MessageTable = 11,
    GroupCursor = 12,
    GroupIcon = 14,
    Version = 16,
    DialogInclude = 17,
    PlugPlay = 19,
    Vxd = 20,
    AnimatedCursor = 21,
    AnimatedIcon = 22,
    Html = 23,
    Manifest = 24,
}

impl ResourceType {
    const ALL: [Self; 21] = [
        Self::Cursor,
        Self::Bitmap,
        Self::Icon,
        Self::Menu,
        Self::Dialog,
        Self::String,
        Self::FontDirectory,
        Self::Font,
        Self::Accelerator,
        Self::RCData,
        Self::MessageTable,
        Self::GroupCursor,
        Self::GroupIcon,
        Self::Version,
        Self::DialogInclude,
        Self::PlugPlay,
        Self::Vxd,
        Self::AnimatedCursor,
        Self::AnimatedIcon,
        Self::Html,
        Self::Manifest,
    ];

    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Looks up a predefined type by its numeric id. Custom and named types return [`None`].
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|resource_type| resource_type.id() == id)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cursor => "Cursor",
            Self::Bitmap => "Bitmap",
            Self::Icon => "Icon",
            Self::Menu => "Menu",
            Self::Dialog => "Dialog",
            Self::String => "String",
            Self::FontDirectory => "FontDirectory",
            Self::Font => "Font",
            Self::Accelerator => "Accelerator",
            Self::RCData => "RCData",
            Self::MessageTable => "MessageTable",
            Self::GroupCursor => "GroupCursor",
            Self::GroupIcon => "GroupIcon",
            Self::Version => "Version",
            Self::DialogInclude => "DialogInclude",
            Self::PlugPlay => "PlugPlay",
            Self::Vxd => "Vxd",
            Self::AnimatedCursor => "AnimatedCursor",
            Self::AnimatedIcon => "AnimatedIcon",
            Self::Html => "Html",
            Self::Manifest => "Manifest",
        }
    }
}

impl fmt::Debug for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}({})", self.id())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResourceType> for u32 {
    #[inline]
    fn from(resource_type: ResourceType) -> Self {
        resource_type.id()
    }
}
