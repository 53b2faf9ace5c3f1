use std::fmt::Display;

use anyhow::Result;
use is_terminal::IsTerminal;
use medals_runtime::{Alert, Notifier};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::result::{CommandResultViewModel, StatusLevel};
use crate::types::OutputFormat;

/// Prints command results to stdout as text or pretty JSON.
pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                let label = match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Info => badge.label.cyan().bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                    StatusLevel::Error => badge.label.red().bold().to_string(),
                };
                println!("{} {}", badge.icon(), label);
            } else {
                println!("{} {}", badge.icon(), badge.label);
            }
            println!();
        }

        if self.color {
            print!("{:#}", result.content);
        } else {
            print!("{}", result.content);
        }

        if !result.suggestions.is_empty() {
            println!();
            println!("Tips:");
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}

/// Alerts for batch commands go straight to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&mut self, alert: Alert) {
        if std::io::stderr().is_terminal() {
            eprintln!("{} {}", alert.title().red().bold(), alert);
        } else {
            eprintln!("{}: {}", alert.title(), alert);
        }
    }
}
