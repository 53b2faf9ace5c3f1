use crossterm::event::{KeyCode, KeyEvent};
use medals_types::MedalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FormField {
    #[default]
    Name,
    Medal(MedalKind),
}

impl FormField {
    pub const ORDER: [FormField; 4] = [
        FormField::Name,
        FormField::Medal(MedalKind::Gold),
        FormField::Medal(MedalKind::Silver),
        FormField::Medal(MedalKind::Bronze),
    ];

    fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| field == self)
            .unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn previous(&self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormOutcome {
    Editing,
    Cancelled,
    Submitted {
        name: String,
        gold: i64,
        silver: i64,
        bronze: i64,
    },
}

/// The add-country popup: a name plus seed counts for each medal.
#[derive(Debug, Clone, Default)]
pub(crate) struct AddForm {
    pub name: String,
    pub gold: String,
    pub silver: String,
    pub bronze: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> FormField {
        self.focus
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Medal(MedalKind::Gold) => &self.gold,
            FormField::Medal(MedalKind::Silver) => &self.silver,
            FormField::Medal(MedalKind::Bronze) => &self.bronze,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Medal(MedalKind::Gold) => &mut self.gold,
            FormField::Medal(MedalKind::Silver) => &mut self.silver,
            FormField::Medal(MedalKind::Bronze) => &mut self.bronze,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        let field = self.focused();
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancelled,
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = field.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = field.previous(),
            KeyCode::Backspace => {
                self.value_mut(field).pop();
            }
            KeyCode::Char(c) => match field {
                FormField::Name => self.name.push(c),
                FormField::Medal(_) => {
                    let value = self.value_mut(field);
                    if c.is_ascii_digit() || (c == '-' && value.is_empty()) {
                        value.push(c);
                    }
                }
            },
            _ => {}
        }
        FormOutcome::Editing
    }

    fn submit(&mut self) -> FormOutcome {
        let name = self.name.trim();
        if name.is_empty() {
            self.error = Some("Name is required".to_string());
            self.focus = FormField::Name;
            return FormOutcome::Editing;
        }

        let mut counts = [0i64; 3];
        for (slot, kind) in counts.iter_mut().zip(MedalKind::ALL) {
            let raw = self.value(FormField::Medal(kind)).trim();
            if raw.is_empty() {
                continue;
            }
            match raw.parse::<i64>() {
                Ok(n) => *slot = n,
                Err(_) => {
                    self.error =
                        Some(format!("{} must be a whole number", kind.descriptor().title()));
                    self.focus = FormField::Medal(kind);
                    return FormOutcome::Editing;
                }
            }
        }

        let [gold, silver, bronze] = counts;
        FormOutcome::Submitted {
            name: name.to_string(),
            gold,
            silver,
            bronze,
        }
    }
}
