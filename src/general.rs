use chrono::{DateTime, Utc};

use crate::codes::general;
use crate::error::FeedError;
use crate::feed::Record;
use crate::model::{MatchStatus, date_from_timestamp};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralInfo {
    pub timestamp: i64,
    pub date: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    pub home_team_score: Option<u32>,
    pub away_team_score: Option<u32>,
    pub final_total_score: Option<String>,
}

/// Interprets the first record of the general stream: kickoff timestamp,
/// status code, and the optional score pair.
pub fn parse(records: &[Record]) -> Result<GeneralInfo, FeedError> {
    let record = records.first().ok_or(FeedError::MissingField {
        code: general::KICKOFF,
    })?;

    let timestamp = record.require_i64(general::KICKOFF)?;
    let status_code = record.require(general::STATUS)?;
    let status = MatchStatus::from_code(status_code).ok_or_else(|| FeedError::UnknownStatus {
        code: status_code.to_string(),
    })?;

    let home_team_score = record.optional_u32(general::HOME_SCORE)?;
    let away_team_score = record.optional_u32(general::AWAY_SCORE)?;
    // The combined rendering is only set when both sides are known;
    // a lone score never produces a half-formed "2:" string.
    let final_total_score = match (home_team_score, away_team_score) {
        (Some(home), Some(away)) => Some(format!("{home}:{away}")),
        _ => None,
    };

    Ok(GeneralInfo {
        timestamp,
        date: date_from_timestamp(timestamp),
        status,
        home_team_score,
        away_team_score,
        final_total_score,
    })
}
