use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Light/dark presentation preference. Held in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Appearance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            _ => Err(Error::UnknownAppearance(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Appearance::default(), Appearance::Dark);
    }

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let appearance = Appearance::Dark.toggled();
        assert_eq!(appearance, Appearance::Light);
        assert_eq!(appearance.toggled(), Appearance::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Light".parse::<Appearance>(), Ok(Appearance::Light));
        assert!("sepia".parse::<Appearance>().is_err());
    }
}
