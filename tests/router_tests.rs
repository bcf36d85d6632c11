use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use mlb_stats_bot::keyboards::{
    self, FranchiseTarget, Keyboard, back_keyboard, franchise_keyboard, games_schedule_keyboard,
    start_keyboard,
};
use mlb_stats_bot::messages;
use mlb_stats_bot::router::{Action, BackTarget, Render, dispatch};
use mlb_stats_bot::statsapi::StatsApi;

#[test]
fn tokens_round_trip_through_parse() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let actions = [
        Action::Scores,
        Action::Games(date),
        Action::Refresh(date),
        Action::Standings,
        Action::Teams,
        Action::Team(147),
        Action::Rosters,
        Action::Roster(147),
        Action::Back(BackTarget::Start),
        Action::Back(BackTarget::Teams),
        Action::Back(BackTarget::Rosters),
    ];
    for action in actions {
        assert_eq!(Action::parse(&action.token()), action, "token was: {}", action.token());
    }

    assert_eq!(Action::Team(147).token(), "team:147");
    assert_eq!(Action::parse("team:147"), Action::Team(147));
    assert_eq!(Action::Games(date).token(), "games:2024-05-01");
}

#[test]
fn tokens_outside_the_grammar_parse_to_unknown() {
    let unknowns = [
        "",
        "bogus",
        "bogus:1",
        "scores:extra",
        "team:",
        "team:abc",
        "team:1:2",
        "games:not-a-date",
        "games:2024-13-40",
        "refresh:yesterday",
        "back:nowhere",
        "back:",
    ];
    for raw in unknowns {
        assert_eq!(Action::parse(raw), Action::Unknown, "raw was: {:?}", raw);
    }
}

#[test]
fn start_keyboard_covers_the_four_entry_actions() {
    let tokens: Vec<String> = start_keyboard()
        .rows
        .iter()
        .flatten()
        .map(|b| b.token.clone())
        .collect();
    assert_eq!(tokens, ["scores", "standings", "teams", "rosters"]);
}

#[test]
fn schedule_keyboard_navigates_one_day_each_way() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let kb = games_schedule_keyboard(date);
    let tokens: Vec<&str> = kb.rows.iter().flatten().map(|b| b.token.as_str()).collect();

    assert!(tokens.contains(&"games:2024-04-30"), "tokens were: {:?}", tokens);
    assert!(tokens.contains(&"games:2024-05-02"), "tokens were: {:?}", tokens);
    assert!(tokens.contains(&"refresh:2024-05-01"), "tokens were: {:?}", tokens);
    assert!(tokens.contains(&"back:start"), "tokens were: {:?}", tokens);
    // The Today button always points at a parseable date
    let today = &kb.rows[0][1];
    assert!(matches!(Action::parse(&today.token), Action::Games(_)), "token was: {}", today.token);
}

#[test]
fn franchise_keyboard_lists_all_thirty_clubs_two_per_row() {
    let kb = franchise_keyboard(FranchiseTarget::TeamDetails);
    let buttons: Vec<_> = kb.rows.iter().flatten().collect();

    assert_eq!(buttons.len(), 31, "30 clubs plus back");
    for button in &buttons[..30] {
        assert!(
            matches!(Action::parse(&button.token), Action::Team(_)),
            "token was: {}",
            button.token
        );
    }
    assert_eq!(buttons[30].token, "back:start");
    for row in &kb.rows[..kb.rows.len() - 1] {
        assert_eq!(row.len(), 2);
    }

    let roster_kb = franchise_keyboard(FranchiseTarget::Roster);
    let first = &roster_kb.rows[0][0];
    assert!(
        matches!(Action::parse(&first.token), Action::Roster(_)),
        "token was: {}",
        first.token
    );
}

#[derive(Default)]
struct RecordingScreen {
    rendered: Mutex<Vec<(String, Keyboard)>>,
}

#[async_trait]
impl Render for RecordingScreen {
    async fn render(&self, text: String, keyboard: Keyboard) -> Result<(), String> {
        self.rendered.lock().unwrap().push((text, keyboard));
        Ok(())
    }
}

#[tokio::test]
async fn unknown_action_is_a_no_op() {
    let screen = RecordingScreen::default();
    dispatch(Action::Unknown, &StatsApi::new(), &screen)
        .await
        .expect("dispatch failed");

    assert!(screen.rendered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn back_to_start_renders_the_welcome_view() {
    let screen = RecordingScreen::default();
    dispatch(Action::Back(BackTarget::Start), &StatsApi::new(), &screen)
        .await
        .expect("dispatch failed");

    let rendered = screen.rendered.lock().unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].0, messages::WELCOME_MESSAGE);
    assert_eq!(rendered[0].1, keyboards::start_keyboard());
}

#[tokio::test]
async fn team_list_renders_the_franchise_grid() {
    let screen = RecordingScreen::default();
    dispatch(Action::Teams, &StatsApi::new(), &screen)
        .await
        .expect("dispatch failed");

    let rendered = screen.rendered.lock().unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].0, messages::SELECT_TEAM_MESSAGE);
    assert_eq!(rendered[0].1, franchise_keyboard(FranchiseTarget::TeamDetails));
}

#[tokio::test]
async fn roster_list_renders_the_franchise_grid_with_roster_payloads() {
    let screen = RecordingScreen::default();
    dispatch(Action::Back(BackTarget::Rosters), &StatsApi::new(), &screen)
        .await
        .expect("dispatch failed");

    let rendered = screen.rendered.lock().unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].0, messages::SELECT_ROSTER_MESSAGE);
    assert_eq!(rendered[0].1, franchise_keyboard(FranchiseTarget::Roster));
}

#[test]
fn back_keyboard_points_at_its_target() {
    let kb = back_keyboard(BackTarget::Teams);
    assert_eq!(kb.rows.len(), 1);
    assert_eq!(kb.rows[0][0].token, "back:teams");
}
