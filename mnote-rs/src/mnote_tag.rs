/// Resolves vendor tag identifiers to human-readable strings.
pub trait TagRegistry {
    /// The short identifier of `tag`, e.g. `"OwnerName"`.
    fn name(&self, tag: u16) -> Option<&str>;
    /// The display title of `tag`, e.g. `"Owner Name"`.
    fn title(&self, tag: u16) -> Option<&str>;
    fn description(&self, tag: u16) -> Option<&str>;
}

/// Canon maker-note tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CanonTag {
    Settings1 = 0x0001,
    Settings2 = 0x0004,
    ImageType = 0x0006,
    FirmwareVersion = 0x0007,
    ImageNumber = 0x0008,
    OwnerName = 0x0009,
    SerialNumber = 0x000c,
    CustomFunctions = 0x000f,
    /// Any tag not listed above, stores the raw value.
    Unknown(u16),
}

impl From<u16> for CanonTag {
    fn from(tag: u16) -> Self {
        match tag {
            0x0001 => CanonTag::Settings1,
            0x0004 => CanonTag::Settings2,
            0x0006 => CanonTag::ImageType,
            0x0007 => CanonTag::FirmwareVersion,
            0x0008 => CanonTag::ImageNumber,
            0x0009 => CanonTag::OwnerName,
            0x000c => CanonTag::SerialNumber,
            0x000f => CanonTag::CustomFunctions,
            other => CanonTag::Unknown(other),
        }
    }
}

struct TagInfo {
    tag: CanonTag,
    name: &'static str,
    title: &'static str,
    description: &'static str,
}

const CANON_TAGS: &[TagInfo] = &[
    TagInfo {
        tag: CanonTag::Settings1,
        name: "Settings1",
        title: "Settings (first part)",
        description: "",
    },
    TagInfo {
        tag: CanonTag::Settings2,
        name: "Settings2",
        title: "Settings (second part)",
        description: "",
    },
    TagInfo {
        tag: CanonTag::ImageType,
        name: "ImageType",
        title: "Image Type",
        description: "",
    },
    TagInfo {
        tag: CanonTag::FirmwareVersion,
        name: "FirmwareVersion",
        title: "Firmware Version",
        description: "",
    },
    TagInfo {
        tag: CanonTag::ImageNumber,
        name: "ImageNumber",
        title: "Image Number",
        description: "",
    },
    TagInfo {
        tag: CanonTag::OwnerName,
        name: "OwnerName",
        title: "Owner Name",
        description: "",
    },
    TagInfo {
        tag: CanonTag::SerialNumber,
        name: "SerialNumber",
        title: "Serial Number",
        description: "",
    },
    TagInfo {
        tag: CanonTag::CustomFunctions,
        name: "CustomFunctions",
        title: "Custom Functions",
        description: "",
    },
];

/// The built-in registry of Canon maker-note tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct CanonTagRegistry;

impl CanonTagRegistry {
    fn info(tag: u16) -> Option<&'static TagInfo> {
        let tag = CanonTag::from(tag);
        CANON_TAGS.iter().find(|info| info.tag == tag)
    }
}

impl TagRegistry for CanonTagRegistry {
    fn name(&self, tag: u16) -> Option<&str> {
        Self::info(tag).map(|info| info.name)
    }

    fn title(&self, tag: u16) -> Option<&str> {
        Self::info(tag).map(|info| info.title)
    }

    fn description(&self, tag: u16) -> Option<&str> {
        Self::info(tag).map(|info| info.description)
    }
}
