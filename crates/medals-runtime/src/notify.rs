use std::fmt;
use std::sync::mpsc::Sender;

use medals_types::CountryId;

/// Blocking, user-facing notification raised by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Delete failed for a reason other than "not found"; local state was restored.
    DeleteFailed {
        id: CountryId,
        name: Option<String>,
        reason: String,
    },
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::DeleteFailed { .. } => "Delete failed",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::DeleteFailed { id, name, reason } => {
                let label = name.as_deref().map_or_else(|| id.to_string(), str::to_string);
                write!(
                    f,
                    "An error occurred while deleting {} ({}). The list has been restored.",
                    label, reason
                )
            }
        }
    }
}

/// Seam through which the controller alerts the user.
pub trait Notifier {
    fn alert(&mut self, alert: Alert);
}

/// Collects alerts in order; handy for tests and batch callers.
impl Notifier for Vec<Alert> {
    fn alert(&mut self, alert: Alert) {
        self.push(alert);
    }
}

/// Forwards alerts to a UI loop that drains the receiving end.
impl Notifier for Sender<Alert> {
    fn alert(&mut self, alert: Alert) {
        if self.send(alert).is_err() {
            tracing::warn!("alert dropped: receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_prefers_country_name() {
        let alert = Alert::DeleteFailed {
            id: CountryId::new(4),
            name: Some("France".to_string()),
            reason: "Server returned HTTP 500".to_string(),
        };

        assert_eq!(
            alert.to_string(),
            "An error occurred while deleting France (Server returned HTTP 500). The list has been restored."
        );
    }

    #[test]
    fn test_message_falls_back_to_id() {
        let alert = Alert::DeleteFailed {
            id: CountryId::new(4),
            name: None,
            reason: "timeout".to_string(),
        };

        assert!(alert.to_string().contains("deleting 4 (timeout)"));
    }

    #[test]
    fn test_channel_notifier_delivers() {
        let (mut tx, rx) = std::sync::mpsc::channel();
        let alert = Alert::DeleteFailed {
            id: CountryId::new(1),
            name: None,
            reason: "boom".to_string(),
        };

        tx.alert(alert.clone());

        assert_eq!(rx.try_recv().unwrap(), alert);
    }
}
