use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use scorefeed::assemble::{
    FetchPayloads, MatchPayloads, MatchRef, assemble_match, load_match,
};
use scorefeed::error::FeedError;
use scorefeed::model::{EventKind, MatchResult, MatchStatus};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_payloads() -> MatchPayloads {
    MatchPayloads {
        header: read_fixture("match_header.html"),
        general: read_fixture("general.feed"),
        stats: read_fixture("stats.feed"),
        events: read_fixture("events.feed"),
        odds: read_fixture("odds.json"),
        history: read_fixture("history.feed"),
    }
}

/// Serves the fixture payloads, reporting the stats payload absent for
/// the first `failing_calls` fetch rounds.
struct FixtureFetcher {
    calls: AtomicUsize,
    failing_calls: usize,
}

impl FixtureFetcher {
    fn new(failing_calls: usize) -> Self {
        FixtureFetcher {
            calls: AtomicUsize::new(0),
            failing_calls,
        }
    }
}

impl FetchPayloads for FixtureFetcher {
    fn fetch(&self, locators: &[String]) -> Vec<Option<String>> {
        assert_eq!(locators.len(), 6);
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let payloads = fixture_payloads();
        let mut out = vec![
            Some(payloads.header),
            Some(payloads.general),
            Some(payloads.stats),
            Some(payloads.events),
            Some(payloads.odds),
            Some(payloads.history),
        ];
        if call < self.failing_calls {
            out[2] = None;
        }
        out
    }
}

fn fixture_ref() -> MatchRef {
    MatchRef {
        id: "AbCd1234".to_string(),
        country_name: String::new(),
        league_name: "Premier League".to_string(),
    }
}

#[test]
fn assembles_full_match_from_fixtures() {
    let payloads = fixture_payloads();
    let m = assemble_match("AbCd1234", "", "Premier League", &payloads)
        .expect("fixtures should assemble");

    assert_eq!(m.id, "AbCd1234");
    assert_eq!(m.tournament.as_deref(), Some("Premier League"));
    // No caller-supplied country, so the header category fills it.
    assert_eq!(m.country_name, "England");
    assert_eq!(m.home_team_name.as_deref(), Some("Alpha FC"));
    assert_eq!(m.away_team_name.as_deref(), Some("Beta United"));

    assert_eq!(m.timestamp, Some(1718478000));
    assert_eq!(m.status, Some(MatchStatus::Ended));
    assert_eq!(m.final_total_score.as_deref(), Some("2:1"));

    assert_eq!(m.stats_match.len(), 2);
    assert_eq!(m.stats_first_half.len(), 1);
    assert_eq!(m.stats_second_half.len(), 1);

    assert_eq!(m.events.len(), 5);
    assert_eq!(m.events[0].kind, EventKind::Goal);
    assert_eq!(m.events[4].current_score.as_deref(), Some("2:1"));

    let odds = m.odds.expect("odds should be set");
    assert_eq!(odds.home.value, 2.05);
    assert_eq!(odds.middle.value, 3.4);
    assert_eq!(odds.away.value, 4.1);

    assert_eq!(m.home_matches.len(), 2);
    assert_eq!(m.away_matches.len(), 1);
    assert_eq!(m.head2head_matches.len(), 1);
    assert_eq!(m.home_matches[0].result_for_main_team, Some(MatchResult::Win));
}

#[test]
fn caller_country_wins_over_header_category() {
    let payloads = fixture_payloads();
    let m = assemble_match("AbCd1234", "World", "Club Friendlies", &payloads)
        .expect("fixtures should assemble");
    assert_eq!(m.country_name, "World");
}

#[test]
fn refetch_recovers_a_missing_payload() {
    let fetcher = FixtureFetcher::new(1);
    let m = load_match(&fetcher, &fixture_ref()).expect("second attempt should complete");
    assert_eq!(m.final_total_score.as_deref(), Some("2:1"));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn incomplete_after_retry_budget_yields_no_match() {
    let fetcher = FixtureFetcher::new(usize::MAX);
    let err = load_match(&fetcher, &fixture_ref()).expect_err("stats payload never arrives");
    assert!(matches!(
        err,
        FeedError::AssemblyIncomplete {
            missing: 1,
            total: 6,
            attempts: 2,
        }
    ));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn structural_decode_failure_fails_the_match() {
    let mut payloads = fixture_payloads();
    payloads.stats = "SG÷Shots¬no-separator-here~".to_string();
    let err = assemble_match("AbCd1234", "", "Premier League", &payloads)
        .expect_err("malformed stats stream");
    assert!(matches!(err, FeedError::MalformedField { .. }));
}
