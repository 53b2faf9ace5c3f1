use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the three fixed medal categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedalKind {
    Gold,
    Silver,
    Bronze,
}

impl MedalKind {
    /// All kinds in rank order
    pub const ALL: [MedalKind; 3] = [MedalKind::Gold, MedalKind::Silver, MedalKind::Bronze];

    pub fn as_str(&self) -> &'static str {
        match self {
            MedalKind::Gold => "gold",
            MedalKind::Silver => "silver",
            MedalKind::Bronze => "bronze",
        }
    }

    /// Catalog entry describing this kind
    pub fn descriptor(&self) -> &'static MedalType {
        MedalType::of(*self)
    }
}

impl fmt::Display for MedalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MedalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(MedalKind::Gold),
            "silver" => Ok(MedalKind::Silver),
            "bronze" => Ok(MedalKind::Bronze),
            _ => Err(Error::UnknownMedal(s.to_string())),
        }
    }
}

/// Static display descriptor for a medal kind.
///
/// The catalog is fixed for the lifetime of the process and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MedalType {
    pub id: u8,
    pub kind: MedalKind,
    pub name: &'static str,
    /// CSS-style hex color, e.g. `#FFD700`
    pub color: &'static str,
    pub rank: u8,
    #[serde(skip)]
    pub rgb: (u8, u8, u8),
}

static CATALOG: [MedalType; 3] = [
    MedalType {
        id: 1,
        kind: MedalKind::Gold,
        name: "gold",
        color: "#FFD700",
        rank: 1,
        rgb: (0xFF, 0xD7, 0x00),
    },
    MedalType {
        id: 2,
        kind: MedalKind::Silver,
        name: "silver",
        color: "#C0C0C0",
        rank: 2,
        rgb: (0xC0, 0xC0, 0xC0),
    },
    MedalType {
        id: 3,
        kind: MedalKind::Bronze,
        name: "bronze",
        color: "#CD7F32",
        rank: 3,
        rgb: (0xCD, 0x7F, 0x32),
    },
];

impl MedalType {
    /// The full medal catalog, ordered by rank
    pub fn catalog() -> &'static [MedalType] {
        &CATALOG
    }

    pub fn of(kind: MedalKind) -> &'static MedalType {
        match kind {
            MedalKind::Gold => &CATALOG[0],
            MedalKind::Silver => &CATALOG[1],
            MedalKind::Bronze => &CATALOG[2],
        }
    }

    /// Capitalized name for headings
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
