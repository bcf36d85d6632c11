//! Blocking client for the public MLB Stats API.
//!
//! Each operation has a `*_from_json` counterpart that parses a raw
//! response body without touching the network, used by the fixture tests.

use tracing::{error, info, instrument};

use crate::model::roster::{RosterEntry, RosterResponse};
use crate::model::schedule::{Game, ScheduleResponse};
use crate::model::standings::{DivisionRecord, StandingsResponse, TeamRecord};
use crate::reference::MLB_SPORT_ID;

const BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

#[derive(Debug, Clone)]
pub struct StatsApi {
    base_url: String,
}

impl Default for StatsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsApi {
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }

    /// Fetch the games scheduled for a calendar date (YYYY-MM-DD).
    #[instrument(level = "info", skip(self))]
    pub fn schedule(&self, date: &str) -> Result<Vec<Game>, String> {
        let url = format!(
            "{}/schedule?sportId={}&date={}",
            self.base_url, MLB_SPORT_ID, date
        );
        let body = self.get(&url)?;
        let games = Self::schedule_from_json(&body)?;
        info!(date = %date, game_count = games.len(), "Fetched schedule");
        Ok(games)
    }

    /// Parse a schedule response body into the games of its single date
    /// entry. No games scheduled yields an empty list, not an error.
    pub fn schedule_from_json(body: &str) -> Result<Vec<Game>, String> {
        let response: ScheduleResponse = serde_json::from_str(body)
            .map_err(|e| format!("Failed to deserialize schedule response: {}", e))?;
        Ok(response
            .dates
            .into_iter()
            .next()
            .map(|d| d.games)
            .unwrap_or_default())
    }

    /// Fetch one league's division records, optionally as of a date.
    #[instrument(level = "info", skip(self))]
    pub fn standings(&self, league_id: u32, date: Option<&str>) -> Result<Vec<DivisionRecord>, String> {
        let mut url = format!("{}/standings?leagueId={}", self.base_url, league_id);
        if let Some(date) = date {
            url.push_str("&date=");
            url.push_str(date);
        }
        let body = self.get(&url)?;
        let records = Self::standings_from_json(&body)?;
        info!(league_id, record_count = records.len(), "Fetched standings");
        Ok(records)
    }

    pub fn standings_from_json(body: &str) -> Result<Vec<DivisionRecord>, String> {
        let response: StandingsResponse = serde_json::from_str(body)
            .map_err(|e| format!("Failed to deserialize standings response: {}", e))?;
        Ok(response.records)
    }

    /// Fetch a team's active roster.
    #[instrument(level = "info", skip(self))]
    pub fn roster(&self, team_id: u32) -> Result<Vec<RosterEntry>, String> {
        let url = format!("{}/teams/{}/roster", self.base_url, team_id);
        let body = self.get(&url)?;
        let roster = Self::roster_from_json(&body)?;
        info!(team_id, player_count = roster.len(), "Fetched roster");
        Ok(roster)
    }

    pub fn roster_from_json(body: &str) -> Result<Vec<RosterEntry>, String> {
        let response: RosterResponse = serde_json::from_str(body)
            .map_err(|e| format!("Failed to deserialize roster response: {}", e))?;
        Ok(response.roster)
    }

    fn get(&self, url: &str) -> Result<String, String> {
        match ureq::get(url).call() {
            Ok(response) => {
                let mut body_reader = response.into_body();
                match body_reader.read_to_string() {
                    Ok(body) => Ok(body),
                    Err(e) => {
                        error!(error = %e, url = %url, "Failed to read response body");
                        Err(format!("Failed to read response body: {}", e))
                    }
                }
            }
            Err(e) => {
                error!(error = %e, url = %url, "Request failed");
                Err(format!("Request failed: {}", e))
            }
        }
    }
}

/// Search both leagues' division records for the one holding `team_id`.
/// Returns the containing division together with the team's record.
pub fn find_team_record(
    records: &[DivisionRecord],
    team_id: u32,
) -> Option<(&DivisionRecord, &TeamRecord)> {
    for division in records {
        if let Some(record) = division
            .team_records
            .iter()
            .find(|r| r.team.id == Some(team_id))
        {
            return Some((division, record));
        }
    }
    None
}
