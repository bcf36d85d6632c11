//! Inline keyboard layouts.
//!
//! Keyboards are built as plain rows of labeled tokens and converted to
//! Telegram markup in the handler layer, so everything here stays
//! transport-neutral and directly testable.

use chrono::{Duration, NaiveDate, Utc};

use crate::reference;
use crate::router::{Action, BackTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub token: String,
}

impl Button {
    fn new(label: &str, action: &Action) -> Self {
        Self {
            label: label.to_string(),
            token: action.token(),
        }
    }
}

/// Rows of buttons, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

/// Main menu shown on /start and on back-to-start.
pub fn start_keyboard() -> Keyboard {
    Keyboard {
        rows: vec![
            vec![Button::new("Get Today's Schedule", &Action::Scores)],
            vec![Button::new("Get Latest Standings", &Action::Standings)],
            vec![Button::new("Get Team Details", &Action::Teams)],
            vec![Button::new("Get Team Rosters", &Action::Rosters)],
        ],
    }
}

/// Day navigation for the schedule view, anchored on the viewed date.
pub fn games_schedule_keyboard(date: NaiveDate) -> Keyboard {
    let yesterday = date - Duration::days(1);
    let tomorrow = date + Duration::days(1);
    let today = Utc::now().date_naive();

    Keyboard {
        rows: vec![
            vec![
                Button::new("⬅ Yesterday", &Action::Games(yesterday)),
                Button::new("Today", &Action::Games(today)),
                Button::new("Tomorrow ➡", &Action::Games(tomorrow)),
            ],
            vec![Button::new("🔄 Refresh", &Action::Refresh(date))],
            vec![Button::new("⬅ Back", &Action::Back(BackTarget::Start))],
        ],
    }
}

/// Which detail view the franchise grid links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FranchiseTarget {
    TeamDetails,
    Roster,
}

/// All 30 clubs in two columns, payloads pointing at the chosen detail view.
pub fn franchise_keyboard(target: FranchiseTarget) -> Keyboard {
    let mut rows: Vec<Vec<Button>> = Vec::new();
    let mut row: Vec<Button> = Vec::new();
    for (name, id) in reference::teams() {
        let action = match target {
            FranchiseTarget::TeamDetails => Action::Team(id),
            FranchiseTarget::Roster => Action::Roster(id),
        };
        row.push(Button::new(name, &action));
        if row.len() == 2 {
            rows.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows.push(vec![Button::new("⬅ Back", &Action::Back(BackTarget::Start))]);
    Keyboard { rows }
}

pub fn back_keyboard(target: BackTarget) -> Keyboard {
    Keyboard {
        rows: vec![vec![Button::new("⬅ Back", &Action::Back(target))]],
    }
}
