use crate::codes::history;
use crate::error::FeedError;
use crate::feed::{self, Record};
use crate::model::{HistoryMatch, MatchResult, date_from_timestamp};
use crate::sections::split_sections;

/// The provider's fixed bucket layout: the main teams' own recent
/// fixtures, then their meetings with each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchHistory {
    pub home: Vec<HistoryMatch>,
    pub away: Vec<HistoryMatch>,
    pub head2head: Vec<HistoryMatch>,
}

pub fn parse(records: &[Record]) -> Result<MatchHistory, FeedError> {
    let records = feed::trim_sentinel(records);
    let mut out = MatchHistory::default();

    // Bucket 0 is the pre-marker preamble; scanning stops once a fourth
    // section boundary shows up.
    let sectioned = split_sections(
        records,
        0u8,
        |record, current| record.get(history::SECTION).map(|_| current + 1),
        |current| *current >= 4,
    );
    for (section, record) in sectioned {
        if record.get(history::MATCH_ID).is_none() {
            continue;
        }
        let bucket = match section {
            1 => &mut out.home,
            2 => &mut out.away,
            3 => &mut out.head2head,
            _ => continue,
        };
        bucket.push(build_history_match(record)?);
    }

    Ok(out)
}

fn build_history_match(record: &Record) -> Result<HistoryMatch, FeedError> {
    let timestamp = record.require_i64(history::KICKOFF)?;
    let date = date_from_timestamp(timestamp).ok_or_else(|| FeedError::InvalidNumber {
        code: history::KICKOFF,
        value: timestamp.to_string(),
    })?;

    Ok(HistoryMatch {
        id: record.require(history::MATCH_ID)?.to_string(),
        timestamp,
        date,
        home_team_name: record.require(history::HOME_NAME)?.to_string(),
        home_team_score: record.optional_u32(history::HOME_SCORE)?,
        away_team_name: record.require(history::AWAY_NAME)?.to_string(),
        away_team_score: record.optional_u32(history::AWAY_SCORE)?,
        league_name: record.require(history::LEAGUE)?.to_string(),
        country: record.require(history::COUNTRY)?.to_string(),
        final_total_score: record.require(history::FINAL_SCORE)?.to_string(),
        main_team: record.get(history::MAIN_TEAM).map(str::to_string),
        result_for_main_team: record
            .get(history::RESULT)
            .and_then(MatchResult::from_code),
    })
}
