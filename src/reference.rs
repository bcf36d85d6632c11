//! Static MLB reference data: franchise names, scoreboard abbreviations,
//! Stats API identifiers, and the two leagues.

pub const MLB_SPORT_ID: u32 = 1;

pub const AL_LEAGUE_ID: u32 = 103;
pub const NL_LEAGUE_ID: u32 = 104;

/// Franchise name, scoreboard abbreviation, Stats API team id.
static TEAMS: [(&str, &str, u32); 30] = [
    ("Arizona Diamondbacks", "ARI", 109),
    ("Athletics", "ATH", 133),
    ("Atlanta Braves", "ATL", 144),
    ("Baltimore Orioles", "BAL", 110),
    ("Boston Red Sox", "BOS", 111),
    ("Chicago Cubs", "CHC", 112),
    ("Chicago White Sox", "CWS", 145),
    ("Cincinnati Reds", "CIN", 113),
    ("Cleveland Guardians", "CLE", 114),
    ("Colorado Rockies", "COL", 115),
    ("Detroit Tigers", "DET", 116),
    ("Houston Astros", "HOU", 117),
    ("Kansas City Royals", "KC", 118),
    ("Los Angeles Angels", "LAA", 108),
    ("Los Angeles Dodgers", "LAD", 119),
    ("Miami Marlins", "MIA", 146),
    ("Milwaukee Brewers", "MIL", 158),
    ("Minnesota Twins", "MIN", 142),
    ("New York Mets", "NYM", 121),
    ("New York Yankees", "NYY", 147),
    ("Philadelphia Phillies", "PHI", 143),
    ("Pittsburgh Pirates", "PIT", 134),
    ("San Diego Padres", "SD", 135),
    ("San Francisco Giants", "SF", 137),
    ("Seattle Mariners", "SEA", 136),
    ("St. Louis Cardinals", "STL", 138),
    ("Tampa Bay Rays", "TB", 139),
    ("Texas Rangers", "TEX", 140),
    ("Toronto Blue Jays", "TOR", 141),
    ("Washington Nationals", "WSH", 120),
];

/// Scoreboard abbreviation for a franchise name. Names outside the table
/// pass through unchanged, so the lookup is total and idempotent.
pub fn abbreviate(name: &str) -> &str {
    TEAMS
        .iter()
        .find(|(full, _, _)| *full == name)
        .map(|(_, abbr, _)| *abbr)
        .unwrap_or(name)
}

/// Franchise name for a Stats API team id.
pub fn team_name(id: u32) -> Option<&'static str> {
    TEAMS
        .iter()
        .find(|(_, _, team_id)| *team_id == id)
        .map(|(full, _, _)| *full)
}

/// All franchises as (name, team id), in fixed alphabetical order.
pub fn teams() -> impl Iterator<Item = (&'static str, u32)> {
    TEAMS.iter().map(|(full, _, id)| (*full, *id))
}

/// Display name for a league id.
pub fn league_name(id: u32) -> Option<&'static str> {
    match id {
        AL_LEAGUE_ID => Some("American League"),
        NL_LEAGUE_ID => Some("National League"),
        _ => None,
    }
}
