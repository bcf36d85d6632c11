use serde::Deserialize;

use crate::model::TeamRef;

#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub records: Vec<DivisionRecord>,
}

/// One division's standings block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionRecord {
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub league: Option<LeagueRef>,
    #[serde(default)]
    pub team_records: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Division {
    pub id: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueRef {
    pub id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team: TeamRef,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub winning_percentage: Option<String>,
    pub games_back: Option<String>,
    pub wild_card_games_back: Option<String>,
    #[serde(default)]
    pub streak: Option<Streak>,
    pub division_rank: Option<String>,
    pub league_rank: Option<String>,
    pub run_differential: Option<i64>,
    #[serde(default)]
    pub records: Option<TeamRecords>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub streak_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecords {
    #[serde(default)]
    pub split_records: Vec<SplitRecord>,
}

/// A win-loss record restricted to a condition ("home", "away", "lastTen").
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRecord {
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    #[serde(rename = "type")]
    pub split_type: Option<String>,
}
