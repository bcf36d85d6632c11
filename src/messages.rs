//! Message builders for every view the bot renders.
//!
//! Empty upstream results are not errors: each builder has a fixed sentence
//! it renders instead of the formatted block. Missing fields render as
//! placeholders rather than failing the whole message.

use crate::model::roster::RosterEntry;
use crate::model::schedule::Game;
use crate::model::standings::{DivisionRecord, TeamRecord};
use crate::reference;
use crate::timefmt;

const NA: &str = "N/A";

pub const WELCOME_MESSAGE: &str =
    "Welcome to the MLB Statistics Bot! Choose an option to get started:";
pub const SELECT_TEAM_MESSAGE: &str = "Select a team to view detailed stats:";
pub const SELECT_ROSTER_MESSAGE: &str = "Select a team to view detailed roster information:";
pub const FETCH_FAILED_MESSAGE: &str =
    "Something went wrong fetching MLB data. Please try again.";

pub fn no_games_message(date: &str) -> String {
    format!("No MLB games scheduled for {}.", date)
}

/// Render one date's schedule, grouped by Central Time start hour.
///
/// Fails only on an unparseable game timestamp; an unfamiliar game status
/// still renders via the fallback line.
pub fn build_games_schedule_message(date: &str, games: &[Game]) -> Result<String, String> {
    if games.is_empty() {
        return Ok(no_games_message(date));
    }

    // Buckets collect in first-seen order and are sorted by clock value
    // below; lines inside a bucket keep their input order.
    let mut buckets: Vec<(String, Vec<String>)> = Vec::new();
    for game in games {
        let line = game_line(game)?;
        let bucket = timefmt::hour_bucket(&game.game_date)?;
        match buckets.iter_mut().find(|(label, _)| *label == bucket) {
            Some((_, lines)) => lines.push(line),
            None => buckets.push((bucket, vec![line])),
        }
    }
    buckets.sort_by_key(|(label, _)| timefmt::bucket_sort_key(label));

    let mut message = format!("⚾ MLB Games for {}\n\n", date);
    for (label, lines) in &buckets {
        message.push_str(&format!("🕒 {} CT\n", label));
        message.push_str(&lines.join("\n"));
        message.push_str("\n\n");
    }
    Ok(message.trim().to_string())
}

fn game_line(game: &Game) -> Result<String, String> {
    let away = reference::abbreviate(game.teams.away.team.name.as_deref().unwrap_or("TBD"));
    let home = reference::abbreviate(game.teams.home.team.name.as_deref().unwrap_or("TBD"));
    let status = game.status.detailed_state.as_deref().unwrap_or("Unknown");

    let line = match status {
        "Final" | "Game Over" | "In Progress" => {
            let (away_runs, home_runs) = linescore_runs(game);
            let away_score = game.teams.away.score.or(away_runs).unwrap_or(0);
            let home_score = game.teams.home.score.or(home_runs).unwrap_or(0);
            format!("`{} {} @ {} {} — {}`", away, away_score, home, home_score, status)
        }
        "Scheduled" | "Pre-Game" => {
            let start_time = timefmt::exact_time(&game.game_date)?;
            format!("`{} @ {} — {}`", away, home, start_time)
        }
        other => format!("`{} @ {} — {}`", away, home, other),
    };
    Ok(line)
}

fn linescore_runs(game: &Game) -> (Option<i64>, Option<i64>) {
    let teams = game.linescore.as_ref().and_then(|l| l.teams.as_ref());
    (
        teams
            .and_then(|t| t.away.as_ref())
            .and_then(|side| side.runs),
        teams
            .and_then(|t| t.home.as_ref())
            .and_then(|side| side.runs),
    )
}

pub fn no_standings_message(date: Option<&str>) -> String {
    match date {
        Some(date) => format!("No standings data available for {}.", date),
        None => "No standings data available.".to_string(),
    }
}

/// Render division records as a grouped leaderboard, in fetch order.
pub fn build_standings_message(records: &[DivisionRecord], date: Option<&str>) -> String {
    if records.is_empty() {
        return no_standings_message(date);
    }

    let mut message = match date {
        Some(date) => format!("📊 Standings ({})\n\n", date),
        None => "📊 Standings\n\n".to_string(),
    };
    for record in records {
        let division = record
            .division
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .unwrap_or("Unknown Division");
        message.push_str(&format!("🏆 {}\n", division));
        for team_record in &record.team_records {
            message.push_str(&format!(
                "   • {}: {}-{} ({})\n",
                team_record.team.name.as_deref().unwrap_or("Unknown Team"),
                fmt_count(team_record.wins),
                fmt_count(team_record.losses),
                team_record.winning_percentage.as_deref().unwrap_or(NA),
            ));
        }
        message.push('\n');
    }
    message.trim().to_string()
}

pub fn no_team_data_message() -> &'static str {
    "No data available for this team."
}

/// Render the fixed-field stat card for one team, from the division record
/// that contains it.
pub fn build_team_details_message(division: &DivisionRecord, record: &TeamRecord) -> String {
    let team = record.team.name.as_deref().unwrap_or("Unknown Team");
    let league = division
        .league
        .as_ref()
        .and_then(|l| l.id)
        .and_then(reference::league_name)
        .unwrap_or(NA);
    let division_name = division
        .division
        .as_ref()
        .and_then(|d| d.name.as_deref())
        .unwrap_or(NA);
    let streak = record
        .streak
        .as_ref()
        .and_then(|s| s.streak_code.as_deref())
        .unwrap_or(NA);
    let run_differential = record
        .run_differential
        .map(|r| r.to_string())
        .unwrap_or_else(|| NA.to_string());

    format!(
        "📊 {} Stats\n\
         🏆 League: {}\n\
         📍 Division: {}\n\
         \n\
         💪 Record: {}-{} ({})\n\
         📊 Games Back: {} | Wild Card GB: {}\n\
         🔥 Streak: {}\n\
         🏠 Home: {}\n\
         ✈️ Away: {}\n\
         🏅 Division Rank: {}\n\
         🏆 League Rank: {}\n\
         ⚡ Run Differential: {}\n\
         📅 Last 10: {}",
        team,
        league,
        division_name,
        fmt_count(record.wins),
        fmt_count(record.losses),
        record.winning_percentage.as_deref().unwrap_or(NA),
        record.games_back.as_deref().unwrap_or(NA),
        record.wild_card_games_back.as_deref().unwrap_or(NA),
        streak,
        split_record(record, "home"),
        split_record(record, "away"),
        record.division_rank.as_deref().unwrap_or(NA),
        record.league_rank.as_deref().unwrap_or(NA),
        run_differential,
        split_record(record, "lastTen"),
    )
}

// Splits live in an unordered list keyed by type; each degrades to the
// placeholder independently.
fn split_record(record: &TeamRecord, split_type: &str) -> String {
    record
        .records
        .as_ref()
        .and_then(|r| {
            r.split_records
                .iter()
                .find(|s| s.split_type.as_deref() == Some(split_type))
        })
        .and_then(|s| Some(format!("{}-{}", s.wins?, s.losses?)))
        .unwrap_or_else(|| NA.to_string())
}

pub fn team_display_name(team_id: u32) -> String {
    reference::team_name(team_id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Team {}", team_id))
}

pub fn no_roster_message(team: &str) -> String {
    format!("No active roster available for {}.", team)
}

/// Render a team's roster grouped by position category, categories in
/// first-seen order.
pub fn build_team_roster_message(team_id: u32, roster: &[RosterEntry]) -> String {
    let team = team_display_name(team_id);
    if roster.is_empty() {
        return no_roster_message(&team);
    }

    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for entry in roster {
        let category = entry
            .position
            .position_type
            .as_deref()
            .unwrap_or("Other")
            .to_string();
        let line = format!(
            "#{} {} ({})",
            entry.jersey_number.as_deref().unwrap_or("??"),
            entry.person.full_name.as_deref().unwrap_or("Unknown Player"),
            entry.position.abbreviation.as_deref().unwrap_or(NA),
        );
        match groups.iter_mut().find(|(label, _)| *label == category) {
            Some((_, lines)) => lines.push(line),
            None => groups.push((category, vec![line])),
        }
    }

    let mut message = format!("📋 {} Active Roster\n\n", team);
    for (category, lines) in &groups {
        message.push_str(&format!("— {} —\n", category));
        message.push_str(&lines.join("\n"));
        message.push_str("\n\n");
    }
    message.trim().to_string()
}

fn fmt_count(value: Option<u32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NA.to_string())
}
