//! Navigation routing for button interactions.
//!
//! Every inline button carries an `action:argument` payload. Payloads are
//! parsed into a closed [`Action`] enum and dispatched exhaustively, so a
//! token outside the grammar can only ever land on [`Action::Unknown`],
//! which is a strict no-op. [`Action::token`] is the inverse of
//! [`Action::parse`].

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::instrument;

use crate::keyboards::{self, FranchiseTarget, Keyboard};
use crate::messages;
use crate::model::roster::RosterEntry;
use crate::model::schedule::Game;
use crate::model::standings::DivisionRecord;
use crate::reference::{AL_LEAGUE_ID, NL_LEAGUE_ID};
use crate::statsapi::{self, StatsApi};

/// Target of a `back:` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    Start,
    Teams,
    Rosters,
}

impl BackTarget {
    fn as_str(self) -> &'static str {
        match self {
            BackTarget::Start => "start",
            BackTarget::Teams => "teams",
            BackTarget::Rosters => "rosters",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "start" => Some(BackTarget::Start),
            "teams" => Some(BackTarget::Teams),
            "rosters" => Some(BackTarget::Rosters),
            _ => None,
        }
    }
}

/// A parsed navigation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Scores,
    Games(NaiveDate),
    Refresh(NaiveDate),
    Standings,
    Teams,
    Team(u32),
    Rosters,
    Roster(u32),
    Back(BackTarget),
    Unknown,
}

impl Action {
    /// Parse a raw callback payload. Anything outside the grammar,
    /// including a well-formed action with a malformed argument, is
    /// `Unknown`.
    pub fn parse(raw: &str) -> Action {
        let (action, argument) = match raw.split_once(':') {
            Some((action, argument)) => (action, Some(argument)),
            None => (raw, None),
        };
        match (action, argument) {
            ("scores", None) => Action::Scores,
            ("standings", None) => Action::Standings,
            ("teams", None) => Action::Teams,
            ("rosters", None) => Action::Rosters,
            ("games", Some(arg)) => parse_date(arg).map(Action::Games).unwrap_or(Action::Unknown),
            ("refresh", Some(arg)) => parse_date(arg)
                .map(Action::Refresh)
                .unwrap_or(Action::Unknown),
            ("team", Some(arg)) => arg.parse().map(Action::Team).unwrap_or(Action::Unknown),
            ("roster", Some(arg)) => arg.parse().map(Action::Roster).unwrap_or(Action::Unknown),
            ("back", Some(arg)) => BackTarget::parse(arg)
                .map(Action::Back)
                .unwrap_or(Action::Unknown),
            _ => Action::Unknown,
        }
    }

    /// Build the wire payload for this action; inverse of [`Action::parse`].
    pub fn token(&self) -> String {
        match self {
            Action::Scores => "scores".to_string(),
            Action::Games(date) => format!("games:{}", date.format("%Y-%m-%d")),
            Action::Refresh(date) => format!("refresh:{}", date.format("%Y-%m-%d")),
            Action::Standings => "standings".to_string(),
            Action::Teams => "teams".to_string(),
            Action::Team(id) => format!("team:{}", id),
            Action::Rosters => "rosters".to_string(),
            Action::Roster(id) => format!("roster:{}", id),
            Action::Back(target) => format!("back:{}", target.as_str()),
            Action::Unknown => String::new(),
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Replaces the displayed content for one interaction context. The only
/// capability the dispatcher needs from the chat transport.
#[async_trait]
pub trait Render {
    async fn render(&self, text: String, keyboard: Keyboard) -> Result<(), String>;
}

/// Handle one parsed token end to end: fetch, format, rebuild the keyboard
/// for the new view, and replace the displayed message. An `Err` means the
/// interaction failed and nothing was rendered for it.
#[instrument(level = "info", skip(api, screen))]
pub async fn dispatch<R>(action: Action, api: &StatsApi, screen: &R) -> Result<(), String>
where
    R: Render + Sync,
{
    match action {
        Action::Scores => show_schedule(api, screen, Utc::now().date_naive()).await,
        Action::Games(date) | Action::Refresh(date) => show_schedule(api, screen, date).await,
        Action::Standings => {
            let date = Utc::now().date_naive().format("%Y-%m-%d").to_string();
            let records = fetch_all_standings(api, Some(date.clone())).await?;
            let text = messages::build_standings_message(&records, Some(&date));
            screen
                .render(text, keyboards::back_keyboard(BackTarget::Start))
                .await
        }
        Action::Teams | Action::Back(BackTarget::Teams) => {
            screen
                .render(
                    messages::SELECT_TEAM_MESSAGE.to_string(),
                    keyboards::franchise_keyboard(FranchiseTarget::TeamDetails),
                )
                .await
        }
        Action::Rosters | Action::Back(BackTarget::Rosters) => {
            screen
                .render(
                    messages::SELECT_ROSTER_MESSAGE.to_string(),
                    keyboards::franchise_keyboard(FranchiseTarget::Roster),
                )
                .await
        }
        Action::Team(team_id) => {
            let records = fetch_all_standings(api, None).await?;
            let text = match statsapi::find_team_record(&records, team_id) {
                Some((division, record)) => messages::build_team_details_message(division, record),
                None => messages::no_team_data_message().to_string(),
            };
            screen
                .render(text, keyboards::back_keyboard(BackTarget::Teams))
                .await
        }
        Action::Roster(team_id) => {
            let roster = fetch_roster(api, team_id).await?;
            let text = messages::build_team_roster_message(team_id, &roster);
            screen
                .render(text, keyboards::back_keyboard(BackTarget::Rosters))
                .await
        }
        Action::Back(BackTarget::Start) => {
            screen
                .render(
                    messages::WELCOME_MESSAGE.to_string(),
                    keyboards::start_keyboard(),
                )
                .await
        }
        Action::Unknown => Ok(()),
    }
}

async fn show_schedule<R>(api: &StatsApi, screen: &R, date: NaiveDate) -> Result<(), String>
where
    R: Render + Sync,
{
    let games = fetch_schedule(api, date).await?;
    let date_str = date.format("%Y-%m-%d").to_string();
    let text = messages::build_games_schedule_message(&date_str, &games)?;
    screen
        .render(text, keyboards::games_schedule_keyboard(date))
        .await
}

// The stats client is blocking; fetches run on the blocking pool with
// owned inputs.

async fn fetch_schedule(api: &StatsApi, date: NaiveDate) -> Result<Vec<Game>, String> {
    let api = api.clone();
    let date_str = date.format("%Y-%m-%d").to_string();
    tokio::task::spawn_blocking(move || api.schedule(&date_str))
        .await
        .map_err(join_error)?
}

/// Both leagues fetched concurrently, AL records first.
async fn fetch_all_standings(
    api: &StatsApi,
    date: Option<String>,
) -> Result<Vec<DivisionRecord>, String> {
    let al_api = api.clone();
    let nl_api = api.clone();
    let al_date = date.clone();
    let nl_date = date;

    let al = tokio::task::spawn_blocking(move || al_api.standings(AL_LEAGUE_ID, al_date.as_deref()));
    let nl = tokio::task::spawn_blocking(move || nl_api.standings(NL_LEAGUE_ID, nl_date.as_deref()));

    let mut records = al.await.map_err(join_error)??;
    records.extend(nl.await.map_err(join_error)??);
    Ok(records)
}

async fn fetch_roster(api: &StatsApi, team_id: u32) -> Result<Vec<RosterEntry>, String> {
    let api = api.clone();
    tokio::task::spawn_blocking(move || api.roster(team_id))
        .await
        .map_err(join_error)?
}

fn join_error(e: tokio::task::JoinError) -> String {
    format!("Fetch task failed: {}", e)
}
