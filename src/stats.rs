use crate::codes::stats;
use crate::error::FeedError;
use crate::feed::{self, Record};
use crate::model::StatValue;
use crate::sections::split_sections;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStats {
    pub match_totals: Vec<StatValue>,
    pub first_half: Vec<StatValue>,
    pub second_half: Vec<StatValue>,
}

/// Buckets the statistics stream into whole-match and per-half lists.
/// Rows under a section name outside the known three are dropped.
pub fn parse(records: &[Record]) -> Result<MatchStats, FeedError> {
    let records = feed::trim_sentinel(records);
    let mut out = MatchStats::default();

    let sectioned = split_sections(
        records,
        stats::SECTION_MATCH.to_string(),
        |record, _| record.get(stats::SECTION).map(str::to_string),
        |_| false,
    );
    for (section, record) in sectioned {
        let bucket = match section.as_str() {
            stats::SECTION_MATCH => &mut out.match_totals,
            stats::SECTION_FIRST_HALF => &mut out.first_half,
            stats::SECTION_SECOND_HALF => &mut out.second_half,
            _ => continue,
        };
        bucket.push(StatValue {
            name: record.require(stats::NAME)?.to_string(),
            home: record.require(stats::HOME_VALUE)?.to_string(),
            away: record.require(stats::AWAY_VALUE)?.to_string(),
        });
    }

    Ok(out)
}
