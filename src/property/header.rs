//! Save file header.
//!
//! The header is read and written by the binary layer; it is carried here so
//! a [`Gvas`](super::Gvas) holds everything needed to re-encode a save.

use crate::util::GvasString;
use std::fmt;

/// Header of a GVAS save file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GvasHeader {
    pub gvas_version: i32,
    pub structure_version: i32,
    /// Present only in newer save format versions.
    pub unknown_version: Option<i32>,
    pub engine_version: EngineVersion,
    pub custom_format_version: i32,
    pub custom_data: Vec<CustomData>,
    pub save_type: GvasString,
}

/// Engine version that wrote the save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    pub build: u32,
    pub build_id: GvasString,
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}-{}", self.major, self.minor, self.patch, self.build)?;
        if let Some(id) = &self.build_id {
            write!(f, "+{id}")?;
        }
        Ok(())
    }
}

/// Custom version entry (GUID and version number).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomData {
    pub guid: [u8; 16],
    pub value: i32,
}
