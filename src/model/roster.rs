use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
    pub roster_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub jersey_number: Option<String>,
    pub person: Person,
    pub position: Position,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Option<u32>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub abbreviation: Option<String>,
    // Position category ("Pitcher", "Infielder", ...), used for grouping.
    #[serde(rename = "type")]
    pub position_type: Option<String>,
}
