use std::env;

use rayon::prelude::*;

use crate::error::FeedError;
use crate::model::Match;
use crate::{events, feed, fetch, general, header, history, odds, stats};

pub const PAYLOADS_PER_MATCH: usize = 6;

/// Identity of a match within its catalog context.
#[derive(Debug, Clone)]
pub struct MatchRef {
    pub id: String,
    pub country_name: String,
    pub league_name: String,
}

/// The six raw payloads belonging to one match, in locator order.
#[derive(Debug, Clone)]
pub struct MatchPayloads {
    pub header: String,
    pub general: String,
    pub stats: String,
    pub events: String,
    pub odds: String,
    pub history: String,
}

impl MatchPayloads {
    fn from_fetched(fetched: Vec<Option<String>>) -> Option<Self> {
        let [header, general, stats, events, odds, history]: [Option<String>;
            PAYLOADS_PER_MATCH] = fetched.try_into().ok()?;
        Some(MatchPayloads {
            header: header?,
            general: general?,
            stats: stats?,
            events: events?,
            odds: odds?,
            history: history?,
        })
    }
}

/// Payload transport, implemented outside the decoding core. One entry
/// per locator, same order; `None` where that fetch failed or timed out.
pub trait FetchPayloads: Sync {
    fn fetch(&self, locators: &[String]) -> Vec<Option<String>>;
}

/// Runs the six interpreters over one match's payloads and merges their
/// outputs. Pure; any structural decode failure aborts this match only.
pub fn assemble_match(
    id: &str,
    country_name: &str,
    league_name: &str,
    payloads: &MatchPayloads,
) -> Result<Match, FeedError> {
    let mut out = Match::new(id, country_name, league_name);

    let header = header::parse(&payloads.header)?;
    out.tournament = Some(header.tournament);
    out.home_team_name = Some(header.home_team_name);
    out.away_team_name = Some(header.away_team_name);
    if out.country_name.is_empty() {
        out.country_name = header.category;
    }

    let info = general::parse(&feed::decode(&payloads.general)?)?;
    out.timestamp = Some(info.timestamp);
    out.date = info.date;
    out.status = Some(info.status);
    out.home_team_score = info.home_team_score;
    out.away_team_score = info.away_team_score;
    out.final_total_score = info.final_total_score;

    let stats = stats::parse(&feed::decode(&payloads.stats)?)?;
    out.stats_match = stats.match_totals;
    out.stats_first_half = stats.first_half;
    out.stats_second_half = stats.second_half;

    out.events = events::parse(&feed::decode(&payloads.events)?)?;
    out.odds = Some(odds::parse(&payloads.odds)?);

    let history = history::parse(&feed::decode(&payloads.history)?)?;
    out.home_matches = history.home;
    out.away_matches = history.away;
    out.head2head_matches = history.head2head;

    Ok(out)
}

/// Fetches the six payloads for one match and assembles them, re-fetching
/// the full set up to the attempt budget when any payload comes back
/// absent.
pub fn load_match(
    fetcher: &impl FetchPayloads,
    match_ref: &MatchRef,
) -> Result<Match, FeedError> {
    let locators = fetch::match_locators(&match_ref.id);
    let attempts = fetch_attempts();

    let mut missing = PAYLOADS_PER_MATCH;
    let mut complete = None;
    for attempt in 1..=attempts {
        let fetched = fetcher.fetch(&locators);
        missing = missing_count(&fetched);
        match MatchPayloads::from_fetched(fetched) {
            Some(payloads) => {
                complete = Some(payloads);
                break;
            }
            None => log::warn!(
                "match {}: {missing} of {PAYLOADS_PER_MATCH} payloads missing on attempt {attempt}",
                match_ref.id
            ),
        }
    }

    let Some(payloads) = complete else {
        return Err(FeedError::AssemblyIncomplete {
            missing,
            total: PAYLOADS_PER_MATCH,
            attempts,
        });
    };
    assemble_match(
        &match_ref.id,
        &match_ref.country_name,
        &match_ref.league_name,
        &payloads,
    )
}

/// Assembles many matches in parallel; a failed match is logged and
/// skipped, never aborting the batch.
pub fn load_matches(fetcher: &impl FetchPayloads, matches: &[MatchRef]) -> Vec<Match> {
    let pool = fetch::build_fetch_pool();
    fetch::with_fetch_pool(&pool, || {
        matches
            .par_iter()
            .filter_map(|match_ref| match load_match(fetcher, match_ref) {
                Ok(found) => Some(found),
                Err(err) => {
                    log::warn!("match {}: {err}", match_ref.id);
                    None
                }
            })
            .collect()
    })
}

fn missing_count(fetched: &[Option<String>]) -> usize {
    let present = fetched.iter().filter(|payload| payload.is_some()).count();
    PAYLOADS_PER_MATCH.saturating_sub(present)
}

fn fetch_attempts() -> usize {
    env::var("FEED_FETCH_ATTEMPTS")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(2)
        .clamp(1, 5)
}
