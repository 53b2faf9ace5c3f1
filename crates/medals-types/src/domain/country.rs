use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::medal::{MedalKind, MedalType};

/// Server-assigned country identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(u64);

impl CountryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CountryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for CountryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// A single country's medal tally as held by the server.
///
/// Counts are signed: local decrements are not bounded at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub silver: i64,
    #[serde(default)]
    pub bronze: i64,
}

impl Country {
    pub fn new(id: impl Into<CountryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gold: 0,
            silver: 0,
            bronze: 0,
        }
    }

    pub fn with_medals(mut self, gold: i64, silver: i64, bronze: i64) -> Self {
        self.gold = gold;
        self.silver = silver;
        self.bronze = bronze;
        self
    }

    pub fn count(&self, kind: MedalKind) -> i64 {
        match kind {
            MedalKind::Gold => self.gold,
            MedalKind::Silver => self.silver,
            MedalKind::Bronze => self.bronze,
        }
    }

    pub fn count_mut(&mut self, kind: MedalKind) -> &mut i64 {
        match kind {
            MedalKind::Gold => &mut self.gold,
            MedalKind::Silver => &mut self.silver,
            MedalKind::Bronze => &mut self.bronze,
        }
    }

    /// Sum of this country's medals across the catalog, saturating at the `i64` bounds
    pub fn total(&self) -> i64 {
        MedalType::catalog()
            .iter()
            .map(|medal| self.count(medal.kind))
            .fold(0i64, i64::saturating_add)
    }
}

/// Create request body for the `country` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCountry {
    pub name: String,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
}

impl NewCountry {
    /// New country with every medal count at zero
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gold: 0,
            silver: 0,
            bronze: 0,
        }
    }
}
