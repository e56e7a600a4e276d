use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::assemble::{FetchPayloads, PAYLOADS_PER_MATCH};

const MATCH_PAGE_URL: &str = "https://www.flashscore.com/match/";
const FEED_URL: &str = "https://local-global.flashscore.ninja/2/x/feed/";
const ODDS_URL: &str = "https://2.ds.lsapp.eu/pq_graphql?_hash=ope";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs()))
            .build()
            .context("failed to build http client")
    })
}

/// The six resource locators for one match, in the fixed payload order
/// (header page, general, stats, events, odds, history).
pub fn match_locators(match_id: &str) -> [String; PAYLOADS_PER_MATCH] {
    [
        format!("{MATCH_PAGE_URL}{match_id}"),
        format!("{FEED_URL}dc_1_{match_id}"),
        format!("{FEED_URL}df_st_1_{match_id}"),
        format!("{FEED_URL}df_sui_1_{match_id}"),
        format!("{ODDS_URL}&eventId={match_id}&projectId=2"),
        format!("{FEED_URL}df_hh_1_{match_id}"),
    ]
}

/// `FetchPayloads` over plain HTTP; the six requests run concurrently.
pub struct HttpFetcher;

impl FetchPayloads for HttpFetcher {
    fn fetch(&self, locators: &[String]) -> Vec<Option<String>> {
        locators
            .par_iter()
            .map(|url| match fetch_text(url) {
                Ok(body) => Some(body),
                Err(err) => {
                    log::debug!("fetch {url}: {err}");
                    None
                }
            })
            .collect()
    }
}

fn fetch_text(url: &str) -> Result<String> {
    let client = http_client()?;
    let resp = client
        .get(url)
        .header(USER_AGENT, "Mozilla/5.0")
        .send()
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }
    Ok(body)
}

pub fn build_fetch_pool() -> Option<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(fetch_parallelism())
        .build()
        .ok()
}

pub fn with_fetch_pool<T>(pool: &Option<rayon::ThreadPool>, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    if let Some(pool) = pool.as_ref() {
        pool.install(action)
    } else {
        action()
    }
}

fn fetch_parallelism() -> usize {
    env::var("FEED_FETCH_PARALLELISM")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(6)
        .clamp(2, 32)
}

fn request_timeout_secs() -> u64 {
    env::var("FEED_REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
        .clamp(2, 60)
}
