//! View models shared by the console renderer and the TUI.
//!
//! Plain `{}` formatting is uncolored; the alternate form `{:#}` adds ANSI
//! colors for terminals.

use std::fmt;
use std::path::PathBuf;

use medals_runtime::DeleteOutcome;
use medals_types::{Appearance, Country, CountryId, MedalKind, MedalType};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRowViewModel {
    pub id: CountryId,
    pub name: String,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub total: i64,
}

impl CountryRowViewModel {
    pub fn count(&self, kind: MedalKind) -> i64 {
        match kind {
            MedalKind::Gold => self.gold,
            MedalKind::Silver => self.silver,
            MedalKind::Bronze => self.bronze,
        }
    }
}

impl From<&Country> for CountryRowViewModel {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
            gold: country.gold,
            silver: country.silver,
            bronze: country.bronze,
            total: country.total(),
        }
    }
}

/// The board as displayed: rows already in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardViewModel {
    pub countries: Vec<CountryRowViewModel>,
    pub total: i64,
}

impl BoardViewModel {
    pub fn new(sorted: &[&Country], total: i64) -> Self {
        Self {
            countries: sorted.iter().map(|c| CountryRowViewModel::from(*c)).collect(),
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl fmt::Display for BoardViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = f.alternate();

        if color {
            writeln!(f, "{} ({})", "Olympic Medals".bold(), self.total.bold())?;
        } else {
            writeln!(f, "Olympic Medals ({})", self.total)?;
        }
        writeln!(f)?;

        if self.countries.is_empty() {
            return writeln!(f, "No countries yet. Add one with 'medals add <NAME>'.");
        }

        writeln!(
            f,
            "{:<5} {:<24} {:>6} {:>6} {:>6} {:>6}",
            "ID", "COUNTRY", "GOLD", "SILVER", "BRONZE", "TOTAL"
        )?;
        writeln!(f, "{}", "-".repeat(58))?;

        for row in &self.countries {
            write!(f, "{:<5} {:<24}", row.id.to_string(), truncate(&row.name, 24))?;
            for medal in MedalType::catalog() {
                let cell = format!("{:>6}", row.count(medal.kind));
                if color {
                    let (r, g, b) = medal.rgb;
                    write!(f, " {}", cell.truecolor(r, g, b))?;
                } else {
                    write!(f, " {}", cell)?;
                }
            }
            writeln!(f, " {:>6}", row.total)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddResultViewModel {
    pub country: CountryRowViewModel,
}

impl fmt::Display for AddResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if f.alternate() {
            self.country.name.green().to_string()
        } else {
            self.country.name.clone()
        };
        writeln!(
            f,
            "Added {} (id {}) with {} medals",
            name, self.country.id, self.country.total
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteStatus {
    Deleted,
    AlreadyGone,
    RolledBack,
}

impl From<DeleteOutcome> for DeleteStatus {
    fn from(outcome: DeleteOutcome) -> Self {
        match outcome {
            DeleteOutcome::Deleted => DeleteStatus::Deleted,
            DeleteOutcome::AlreadyGone => DeleteStatus::AlreadyGone,
            DeleteOutcome::RolledBack => DeleteStatus::RolledBack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResultViewModel {
    pub id: CountryId,
    pub name: Option<String>,
    pub status: DeleteStatus,
    pub remaining: usize,
    pub total: i64,
}

impl fmt::Display for DeleteResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match &self.name {
            Some(name) => format!("{} (id {})", name, self.id),
            None => format!("Country {}", self.id),
        };
        match self.status {
            DeleteStatus::Deleted => writeln!(f, "Deleted {}", label)?,
            DeleteStatus::AlreadyGone => writeln!(
                f,
                "{} does not exist on the server; it may have already been deleted",
                label
            )?,
            DeleteStatus::RolledBack => writeln!(f, "Delete of {} failed; nothing changed", label)?,
        }
        writeln!(
            f,
            "{} countries, {} medals remaining",
            self.remaining, self.total
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalViewModel {
    pub total: i64,
    pub countries: usize,
}

impl fmt::Display for TotalViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalCatalogViewModel {
    pub medals: Vec<MedalType>,
}

impl MedalCatalogViewModel {
    pub fn new() -> Self {
        Self {
            medals: MedalType::catalog().to_vec(),
        }
    }
}

impl Default for MedalCatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MedalCatalogViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<6} {:<8} COLOR", "RANK", "MEDAL")?;
        for medal in &self.medals {
            let name = medal.title();
            if f.alternate() {
                let (r, g, b) = medal.rgb;
                writeln!(
                    f,
                    "{:<6} {} {}",
                    medal.rank,
                    format!("{:<8}", name).truecolor(r, g, b),
                    medal.color
                )?;
            } else {
                writeln!(f, "{:<6} {:<8} {}", medal.rank, name, medal.color)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_exists: bool,
    pub base_url: String,
    pub timeout_secs: u64,
    pub appearance: Appearance,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_note = if self.config_exists {
            ""
        } else {
            " (not created, using defaults)"
        };
        writeln!(f, "data_dir     {}", self.data_dir.display())?;
        writeln!(f, "config       {}{}", self.config_path.display(), file_note)?;
        writeln!(f, "api.base_url {}", self.base_url)?;
        writeln!(f, "api.timeout  {}s", self.timeout_secs)?;
        writeln!(f, "appearance   {}", self.appearance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigInitViewModel {
    pub config_path: PathBuf,
    pub written: bool,
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.written {
            writeln!(f, "Wrote {}", self.config_path.display())
        } else {
            writeln!(
                f,
                "Config already exists at {} (use --force to overwrite)",
                self.config_path.display()
            )
        }
    }
}

pub(crate) fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
