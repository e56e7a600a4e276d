use serde::Deserialize;

use crate::error::FeedError;

// The match page embeds its header data as a script-assigned object.
const HEADER_PREFIX: &str = "window.environment = {";
const HEADER_TERMINATOR: &str = "};";

#[derive(Debug, Clone, PartialEq)]
pub struct MatchHeader {
    pub tournament: String,
    /// Tournament category; doubles as the country name when the caller
    /// has none.
    pub category: String,
    pub home_team_name: String,
    pub away_team_name: String,
}

#[derive(Debug, Deserialize)]
struct Environment {
    header: EnvironmentHeader,
    #[serde(rename = "participantsData")]
    participants: Participants,
}

#[derive(Debug, Deserialize)]
struct EnvironmentHeader {
    tournament: TournamentBlock,
}

#[derive(Debug, Deserialize)]
struct TournamentBlock {
    tournament: String,
    #[serde(default)]
    category: String,
}

#[derive(Debug, Deserialize)]
struct Participants {
    #[serde(default)]
    home: Vec<Participant>,
    #[serde(default)]
    away: Vec<Participant>,
}

#[derive(Debug, Deserialize)]
struct Participant {
    name: String,
}

/// Extracts the embedded header object from the match page and reads the
/// tournament, category, and both participants' display names.
pub fn parse(page: &str) -> Result<MatchHeader, FeedError> {
    let at = page.find(HEADER_PREFIX).ok_or(FeedError::HeaderNotFound)?;
    // Keep the opening brace; drop the assignment prefix.
    let body = &page[at + HEADER_PREFIX.len() - 1..];
    let end = body.find(HEADER_TERMINATOR).ok_or(FeedError::HeaderNotFound)?;
    let environment: Environment = serde_json::from_str(&body[..end + 1])?;

    let home = environment
        .participants
        .home
        .into_iter()
        .next()
        .ok_or(FeedError::MissingField {
            code: "participantsData.home",
        })?;
    let away = environment
        .participants
        .away
        .into_iter()
        .next()
        .ok_or(FeedError::MissingField {
            code: "participantsData.away",
        })?;

    Ok(MatchHeader {
        tournament: environment.header.tournament.tournament,
        category: environment.header.tournament.category,
        home_team_name: home.name,
        away_team_name: away.name,
    })
}
