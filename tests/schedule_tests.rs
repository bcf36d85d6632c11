use mlb_stats_bot::messages::{build_games_schedule_message, no_games_message};
use mlb_stats_bot::model::schedule::Game;
use mlb_stats_bot::statsapi::StatsApi;

fn load_sample() -> Vec<Game> {
    let json = std::fs::read_to_string("tests/sample_schedule.json")
        .expect("failed to read sample_schedule.json");
    StatsApi::schedule_from_json(&json).expect("schedule_from_json failed")
}

#[test]
fn renders_scheduled_game_under_its_hour_bucket() {
    let games = load_sample();
    let msg = build_games_schedule_message("2024-05-01", &games).expect("build failed");

    assert!(msg.contains("⚾ MLB Games for 2024-05-01"), "message was: {}", msg);
    // 00:05 UTC is 7:05 PM Central the previous evening
    assert!(msg.contains("🕒 7 PM CT"), "message was: {}", msg);
    assert!(msg.contains("`CHC @ NYM — 7:05 PM`"), "message was: {}", msg);
    // Scheduled games carry no score
    assert!(!msg.contains("CHC 0"), "message was: {}", msg);
}

#[test]
fn renders_final_game_with_scores_away_before_home() {
    let games = load_sample();
    let msg = build_games_schedule_message("2024-05-01", &games).expect("build failed");

    assert!(msg.contains("`NYY 3 @ BAL 5 — Final`"), "message was: {}", msg);
}

#[test]
fn live_game_scores_fall_back_to_linescore_runs() {
    let games = load_sample();
    let msg = build_games_schedule_message("2024-05-01", &games).expect("build failed");

    assert!(msg.contains("`LAD 2 @ SD 2 — In Progress`"), "message was: {}", msg);
}

#[test]
fn unfamiliar_status_still_renders_without_scores() {
    let games = load_sample();
    let msg = build_games_schedule_message("2024-05-01", &games).expect("build failed");

    assert!(msg.contains("`SEA @ TEX — Postponed`"), "message was: {}", msg);
}

#[test]
fn buckets_sort_chronologically_and_preserve_input_order_within() {
    let games = load_sample();
    let msg = build_games_schedule_message("2024-05-01", &games).expect("build failed");

    let one_pm = msg.find("🕒 1 PM CT").expect("missing 1 PM bucket");
    let six_pm = msg.find("🕒 6 PM CT").expect("missing 6 PM bucket");
    let seven_pm = msg.find("🕒 7 PM CT").expect("missing 7 PM bucket");
    let nine_pm = msg.find("🕒 9 PM CT").expect("missing 9 PM bucket");
    assert!(one_pm < six_pm && six_pm < seven_pm && seven_pm < nine_pm, "message was: {}", msg);

    // Both 6 PM games collate under one header, in input order
    let final_line = msg.find("NYY 3 @ BAL 5").expect("missing final line");
    let scheduled_line = msg.find("CWS @ DET").expect("missing scheduled line");
    assert!(final_line < scheduled_line, "message was: {}", msg);
    assert_eq!(msg.matches("🕒 6 PM CT").count(), 1, "message was: {}", msg);
}

#[test]
fn empty_schedule_renders_the_fixed_sentence() {
    let msg = build_games_schedule_message("2024-05-01", &[]).expect("build failed");

    assert_eq!(msg, no_games_message("2024-05-01"));
    assert_eq!(msg, "No MLB games scheduled for 2024-05-01.");
    assert!(!msg.contains("🕒"), "message was: {}", msg);
}

#[test]
fn unmapped_team_name_passes_through_unchanged() {
    let game: Game = serde_json::from_value(serde_json::json!({
        "gameDate": "2024-05-02T00:05:00Z",
        "status": { "detailedState": "Scheduled" },
        "teams": {
            "away": { "team": { "id": 9001, "name": "Springfield Isotopes" } },
            "home": { "team": { "id": 112, "name": "Chicago Cubs" } }
        }
    }))
    .expect("game deserialization failed");

    let msg = build_games_schedule_message("2024-05-01", &[game]).expect("build failed");
    assert!(msg.contains("`Springfield Isotopes @ CHC — 7:05 PM`"), "message was: {}", msg);
}

#[test]
fn unparseable_game_time_is_a_formatting_failure() {
    let game: Game = serde_json::from_value(serde_json::json!({
        "gameDate": "not-a-timestamp",
        "status": { "detailedState": "Scheduled" },
        "teams": {
            "away": { "team": { "id": 112, "name": "Chicago Cubs" } },
            "home": { "team": { "id": 121, "name": "New York Mets" } }
        }
    }))
    .expect("game deserialization failed");

    let result = build_games_schedule_message("2024-05-01", &[game]);
    assert!(result.is_err(), "result was: {:?}", result);
}
