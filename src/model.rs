use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    NotStarted,
    Live,
    Ended,
}

impl MatchStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(MatchStatus::NotStarted),
            "2" => Some(MatchStatus::Live),
            "3" => Some(MatchStatus::Ended),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::NotStarted => "Not started",
            MatchStatus::Live => "Live",
            MatchStatus::Ended => "Ended",
        }
    }
}

/// One metric row; the provider mixes numeric and textual values
/// ("12", "58%"), so both sides stay strings.
#[derive(Debug, Clone, PartialEq)]
pub struct StatValue {
    pub name: String,
    pub home: String,
    pub away: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Goal,
    Penalty,
    SubstitutionIn,
    SubstitutionOut,
    YellowCard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub time: String,
    pub player_name: String,
    pub player_url: String,
    pub current_score: Option<String>,
    pub second_player_name: Option<String>,
    pub second_player_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Odds {
    pub team: &'static str,
    pub value: f64,
}

/// All three outcomes priced, or all three zero when the provider has
/// not published odds yet.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsTriple {
    pub home: Odds,
    pub middle: Odds,
    pub away: Odds,
}

impl OddsTriple {
    pub fn zeroed() -> Self {
        OddsTriple {
            home: Odds { team: "home", value: 0.0 },
            middle: Odds { team: "middle", value: 0.0 },
            away: Odds { team: "away", value: 0.0 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "w" => Some(MatchResult::Win),
            "d" => Some(MatchResult::Draw),
            "lo" | "l" => Some(MatchResult::Loss),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryMatch {
    pub id: String,
    pub timestamp: i64,
    pub date: DateTime<Utc>,
    pub home_team_name: String,
    pub home_team_score: Option<u32>,
    pub away_team_name: String,
    pub away_team_score: Option<u32>,
    pub league_name: String,
    pub country: String,
    pub final_total_score: String,
    /// Team the result is classified for; absent in the head-to-head
    /// bucket, which has no main-team perspective.
    pub main_team: Option<String>,
    pub result_for_main_team: Option<MatchResult>,
}

/// Aggregate for one match, populated by the six stream interpreters.
/// Assembly is all-or-nothing; a caller never sees a partially filled
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    pub timestamp: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    pub country_name: String,
    pub league_name: String,
    pub tournament: Option<String>,

    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    pub home_team_score: Option<u32>,
    pub away_team_score: Option<u32>,
    pub final_total_score: Option<String>,

    pub status: Option<MatchStatus>,

    pub stats_match: Vec<StatValue>,
    pub stats_first_half: Vec<StatValue>,
    pub stats_second_half: Vec<StatValue>,

    pub odds: Option<OddsTriple>,

    pub events: Vec<Event>,

    pub home_matches: Vec<HistoryMatch>,
    pub away_matches: Vec<HistoryMatch>,
    pub head2head_matches: Vec<HistoryMatch>,
}

impl Match {
    pub fn new(id: &str, country_name: &str, league_name: &str) -> Self {
        Match {
            id: id.to_string(),
            timestamp: None,
            date: None,
            country_name: country_name.to_string(),
            league_name: league_name.to_string(),
            tournament: None,
            home_team_name: None,
            away_team_name: None,
            home_team_score: None,
            away_team_score: None,
            final_total_score: None,
            status: None,
            stats_match: Vec::new(),
            stats_first_half: Vec::new(),
            stats_second_half: Vec::new(),
            odds: None,
            events: Vec::new(),
            home_matches: Vec::new(),
            away_matches: Vec::new(),
            head2head_matches: Vec::new(),
        }
    }
}

pub fn date_from_timestamp(timestamp: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(timestamp, 0).single()
}
