use crate::codes::events;
use crate::error::FeedError;
use crate::feed::Record;
use crate::model::{Event, EventKind};

/// Interprets the events stream into the timeline. Rows without the
/// detail marker are container headers and carry no event; rows with an
/// unrecognized type code are dropped.
pub fn parse(records: &[Record]) -> Result<Vec<Event>, FeedError> {
    let mut out = Vec::new();
    for record in records {
        if record.get(events::DETAIL).is_none() {
            continue;
        }
        let Some(kind) = classify(record) else {
            continue;
        };
        out.push(build_event(kind, record)?);
    }
    Ok(out)
}

fn classify(record: &Record) -> Option<EventKind> {
    let kind = match record.get(events::KIND)? {
        events::KIND_GOAL => EventKind::Goal,
        events::KIND_SUBSTITUTION_IN => EventKind::SubstitutionIn,
        events::KIND_SUBSTITUTION_OUT => EventKind::SubstitutionOut,
        events::KIND_YELLOW_CARD => EventKind::YellowCard,
        _ => return None,
    };
    // The provider tags shootout penalties as bare Goal rows with no
    // scorer and no running score.
    if kind == EventKind::Goal
        && record.is_blank(events::PLAYER)
        && record.is_blank(events::PLAYER_URL)
        && record.is_blank(events::HOME_SCORE)
        && record.is_blank(events::AWAY_SCORE)
    {
        return Some(EventKind::Penalty);
    }
    Some(kind)
}

fn build_event(kind: EventKind, record: &Record) -> Result<Event, FeedError> {
    let time = record.require(events::TIME)?.to_string();
    let event = match kind {
        EventKind::Goal => Event {
            kind,
            time,
            player_name: record.require(events::PLAYER)?.to_string(),
            player_url: record.require(events::PLAYER_URL)?.to_string(),
            current_score: Some(format!(
                "{}:{}",
                record.require(events::HOME_SCORE)?,
                record.require(events::AWAY_SCORE)?
            )),
            second_player_name: record.get(events::SECOND_PLAYER).map(str::to_string),
            second_player_url: record.get(events::SECOND_PLAYER_URL).map(str::to_string),
            description: None,
        },
        EventKind::Penalty => Event {
            kind,
            time,
            player_name: record.get(events::PLAYER).unwrap_or_default().to_string(),
            player_url: record.get(events::PLAYER_URL).unwrap_or_default().to_string(),
            current_score: None,
            second_player_name: None,
            second_player_url: None,
            description: None,
        },
        EventKind::SubstitutionIn | EventKind::SubstitutionOut => Event {
            kind,
            time,
            player_name: record.require(events::PLAYER)?.to_string(),
            player_url: record.require(events::PLAYER_URL)?.to_string(),
            current_score: None,
            second_player_name: record.get(events::SECOND_PLAYER).map(str::to_string),
            second_player_url: record.get(events::SECOND_PLAYER_URL).map(str::to_string),
            description: None,
        },
        EventKind::YellowCard => Event {
            kind,
            time,
            player_name: record.require(events::PLAYER)?.to_string(),
            player_url: record.require(events::PLAYER_URL)?.to_string(),
            current_score: None,
            second_player_name: None,
            second_player_url: None,
            description: record.get(events::NOTE).map(str::to_string),
        },
    };
    Ok(event)
}
