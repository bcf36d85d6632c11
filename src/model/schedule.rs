use serde::Deserialize;

use crate::model::TeamRef;

#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDate {
    pub date: Option<String>,
    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_date: String,
    pub status: GameStatus,
    pub teams: GameTeams,
    // Populated for live and finished games only.
    #[serde(default)]
    pub linescore: Option<Linescore>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub detailed_state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameTeams {
    pub away: GameSide,
    pub home: GameSide,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameSide {
    pub team: TeamRef,
    #[serde(default)]
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Linescore {
    #[serde(default)]
    pub teams: Option<LinescoreTeams>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinescoreTeams {
    #[serde(default)]
    pub away: Option<LinescoreSide>,
    #[serde(default)]
    pub home: Option<LinescoreSide>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinescoreSide {
    #[serde(default)]
    pub runs: Option<i64>,
}
