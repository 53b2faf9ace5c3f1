use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use medals_runtime::Alert;
use medals_types::{Appearance, CountryId, MedalKind};
use ratatui::widgets::TableState;

use super::form::{AddForm, FormOutcome};
use crate::presentation::{BoardViewModel, StatusLevel};

/// What a key press asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Increment { id: CountryId, medal: MedalKind },
    Decrement { id: CountryId, medal: MedalKind },
    Delete { id: CountryId },
    Add {
        name: String,
        gold: i64,
        silver: i64,
        bronze: i64,
    },
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

/// UI-only state. The country data itself lives in the controller.
pub(crate) struct AppState {
    pub appearance: Appearance,
    pub selected_row: usize,
    pub selected_medal: MedalKind,
    pub table_state: TableState,
    pub form: Option<AddForm>,
    pub alerts: VecDeque<Alert>,
    /// Set when the initial load fails; the board is never shown
    pub fatal: Option<String>,
    pub status: Option<StatusMessage>,
    pub pending: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            selected_row: 0,
            selected_medal: MedalKind::Gold,
            table_state: TableState::default(),
            form: None,
            alerts: VecDeque::new(),
            fatal: None,
            status: None,
            pending: 0,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level,
            text: text.into(),
        });
    }

    pub fn push_alert(&mut self, alert: Alert) {
        self.alerts.push_back(alert);
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    /// Keep the cursor on a real row after the collection shrinks.
    pub fn clamp_selection(&mut self, rows: usize) {
        if rows == 0 {
            self.selected_row = 0;
            self.table_state.select(None);
        } else {
            self.selected_row = self.selected_row.min(rows - 1);
            self.table_state.select(Some(self.selected_row));
        }
    }

    pub fn select_row_of(&mut self, board: &BoardViewModel, id: CountryId) {
        if let Some(idx) = board.countries.iter().position(|row| row.id == id) {
            self.selected_row = idx;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, board: &BoardViewModel) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if self.fatal.is_some() {
            self.should_quit = true;
            return None;
        }

        // An alert is modal: the key only dismisses it.
        if self.alerts.pop_front().is_some() {
            return None;
        }

        if let Some(form) = self.form.as_mut() {
            return match form.handle_key(key) {
                FormOutcome::Editing => None,
                FormOutcome::Cancelled => {
                    self.form = None;
                    None
                }
                FormOutcome::Submitted {
                    name,
                    gold,
                    silver,
                    bronze,
                } => {
                    self.form = None;
                    Some(Action::Add {
                        name,
                        gold,
                        silver,
                        bronze,
                    })
                }
            };
        }

        self.handle_board_key(key, board)
    }

    fn handle_board_key(&mut self, key: KeyEvent, board: &BoardViewModel) -> Option<Action> {
        let rows = board.countries.len();
        let selected_id = board.countries.get(self.selected_row).map(|row| row.id);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                if rows > 0 {
                    self.selected_row = (self.selected_row + 1).min(rows - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Home => self.selected_row = 0,
            KeyCode::End => self.selected_row = rows.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_medal = step_medal(self.selected_medal, 1);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_medal = step_medal(self.selected_medal, -1);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                return selected_id.map(|id| Action::Increment {
                    id,
                    medal: self.selected_medal,
                });
            }
            KeyCode::Char('-') => {
                return selected_id.map(|id| Action::Decrement {
                    id,
                    medal: self.selected_medal,
                });
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                return selected_id.map(|id| Action::Delete { id });
            }
            KeyCode::Char('a') => self.form = Some(AddForm::new()),
            KeyCode::Char('t') => self.appearance = self.appearance.toggled(),
            KeyCode::Char('r') => return Some(Action::Reload),
            _ => {}
        }
        None
    }
}

fn step_medal(current: MedalKind, delta: isize) -> MedalKind {
    let all = MedalKind::ALL;
    let idx = all.iter().position(|k| *k == current).unwrap_or(0) as isize;
    let len = all.len() as isize;
    all[((idx + delta).rem_euclid(len)) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use medals_types::Country;

    fn board() -> BoardViewModel {
        let countries = vec![
            Country::new(1, "Brazil").with_medals(1, 0, 0),
            Country::new(2, "Italy"),
        ];
        let sorted: Vec<&Country> = countries.iter().collect();
        BoardViewModel::new(&sorted, 1)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_row_selection_stays_in_bounds() {
        let board = board();
        let mut state = AppState::new(Appearance::Dark);

        state.handle_key(key(KeyCode::Up), &board);
        assert_eq!(state.selected_row, 0);

        state.handle_key(key(KeyCode::Char('j')), &board);
        state.handle_key(key(KeyCode::Down), &board);
        assert_eq!(state.selected_row, 1);
    }

    #[test]
    fn test_increment_targets_selected_row_and_medal() {
        let board = board();
        let mut state = AppState::new(Appearance::Dark);

        state.handle_key(key(KeyCode::Down), &board);
        state.handle_key(key(KeyCode::Right), &board);
        let action = state.handle_key(key(KeyCode::Char('+')), &board);

        assert_eq!(
            action,
            Some(Action::Increment {
                id: CountryId::new(2),
                medal: MedalKind::Silver,
            })
        );
    }

    #[test]
    fn test_medal_selection_wraps() {
        let board = board();
        let mut state = AppState::new(Appearance::Dark);

        state.handle_key(key(KeyCode::Char('h')), &board);
        let action = state.handle_key(key(KeyCode::Char('-')), &board);

        assert_eq!(
            action,
            Some(Action::Decrement {
                id: CountryId::new(1),
                medal: MedalKind::Bronze,
            })
        );
    }

    #[test]
    fn test_actions_need_a_row() {
        let empty = BoardViewModel::default();
        let mut state = AppState::new(Appearance::Dark);

        assert_eq!(state.handle_key(key(KeyCode::Char('+')), &empty), None);
        assert_eq!(state.handle_key(key(KeyCode::Char('d')), &empty), None);
        assert_eq!(
            state.handle_key(key(KeyCode::Char('r')), &empty),
            Some(Action::Reload)
        );
    }

    #[test]
    fn test_toggle_appearance() {
        let board = board();
        let mut state = AppState::new(Appearance::Dark);

        state.handle_key(key(KeyCode::Char('t')), &board);
        assert_eq!(state.appearance, Appearance::Light);
        state.handle_key(key(KeyCode::Char('t')), &board);
        assert_eq!(state.appearance, Appearance::Dark);
    }

    #[test]
    fn test_alert_swallows_next_key() {
        let board = board();
        let mut state = AppState::new(Appearance::Dark);
        state.push_alert(Alert::DeleteFailed {
            id: CountryId::new(1),
            name: Some("Brazil".to_string()),
            reason: "Server returned HTTP 500".to_string(),
        });

        assert_eq!(state.handle_key(key(KeyCode::Char('d')), &board), None);
        assert!(state.current_alert().is_none());
        assert!(!state.should_quit);

        assert_eq!(
            state.handle_key(key(KeyCode::Char('d')), &board),
            Some(Action::Delete {
                id: CountryId::new(1)
            })
        );
    }

    #[test]
    fn test_form_submission_becomes_add_action() {
        let board = board();
        let mut state = AppState::new(Appearance::Dark);

        state.handle_key(key(KeyCode::Char('a')), &board);
        assert!(state.form.is_some());
        // 'q' is text while the form is open
        for c in "Qatar".chars() {
            assert_eq!(state.handle_key(key(KeyCode::Char(c)), &board), None);
        }
        let action = state.handle_key(key(KeyCode::Enter), &board);

        assert!(!state.should_quit);
        assert!(state.form.is_none());
        assert_eq!(
            action,
            Some(Action::Add {
                name: "Qatar".to_string(),
                gold: 0,
                silver: 0,
                bronze: 0,
            })
        );
    }

    #[test]
    fn test_fatal_screen_quits_on_any_key() {
        let mut state = AppState::new(Appearance::Dark);
        state.fatal = Some("unreachable".to_string());

        state.handle_key(key(KeyCode::Char('x')), &BoardViewModel::default());
        assert!(state.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut state = AppState::new(Appearance::Dark);
        state.form = Some(AddForm::new());

        state.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &board(),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = AppState::new(Appearance::Dark);
        state.selected_row = 5;

        state.clamp_selection(2);
        assert_eq!(state.selected_row, 1);
        assert_eq!(state.table_state.selected(), Some(1));

        state.clamp_selection(0);
        assert_eq!(state.table_state.selected(), None);
    }
}
