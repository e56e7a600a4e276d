use serde::Deserialize;
use serde_json::Value;

use crate::error::FeedError;
use crate::model::{Odds, OddsTriple};

#[derive(Debug, Deserialize, Default)]
struct OddsDocument {
    #[serde(default)]
    data: OddsData,
}

#[derive(Debug, Deserialize, Default)]
struct OddsData {
    #[serde(rename = "findPrematchOddsById", default)]
    prematch: PrematchNode,
}

#[derive(Debug, Deserialize, Default)]
struct PrematchNode {
    #[serde(default)]
    odds: Vec<OddsGroup>,
}

#[derive(Debug, Deserialize)]
struct OddsGroup {
    #[serde(default)]
    odds: Vec<OddsPrice>,
}

#[derive(Debug, Deserialize)]
struct OddsPrice {
    value: Value,
}

/// Interprets the odds document. An empty price list means the provider
/// has not published odds yet and yields the all-zero triple.
pub fn parse(payload: &str) -> Result<OddsTriple, FeedError> {
    let document: OddsDocument = serde_json::from_str(payload)?;
    let Some(group) = document.data.prematch.odds.into_iter().next() else {
        return Ok(OddsTriple::zeroed());
    };

    match group.odds.as_slice() {
        [] => Ok(OddsTriple::zeroed()),
        // The provider publishes the three prices as (middle, away, home).
        [middle, away, home] => Ok(OddsTriple {
            home: Odds {
                team: "home",
                value: decimal(&home.value)?,
            },
            middle: Odds {
                team: "middle",
                value: decimal(&middle.value)?,
            },
            away: Odds {
                team: "away",
                value: decimal(&away.value)?,
            },
        }),
        other => Err(FeedError::UnexpectedOddsShape { len: other.len() }),
    }
}

fn decimal(value: &Value) -> Result<f64, FeedError> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| FeedError::InvalidNumber {
        code: "value",
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::error::FeedError;

    #[test]
    fn three_prices_destructure_positionally() {
        let payload = r#"{"data":{"findPrematchOddsById":{"odds":[{"odds":[{"value":"1.5"},{"value":"2.1"},{"value":"3.0"}]}]}}}"#;
        let odds = parse(payload).expect("valid odds document");
        assert_eq!(odds.middle.value, 1.5);
        assert_eq!(odds.away.value, 2.1);
        assert_eq!(odds.home.value, 3.0);
        assert_eq!(odds.home.team, "home");
    }

    #[test]
    fn empty_price_list_defaults_to_zero() {
        let payload = r#"{"data":{"findPrematchOddsById":{"odds":[{"odds":[]}]}}}"#;
        let odds = parse(payload).expect("valid odds document");
        assert_eq!(odds.home.value, 0.0);
        assert_eq!(odds.middle.value, 0.0);
        assert_eq!(odds.away.value, 0.0);
    }

    #[test]
    fn missing_group_defaults_to_zero() {
        let payload = r#"{"data":{"findPrematchOddsById":{"odds":[]}}}"#;
        let odds = parse(payload).expect("valid odds document");
        assert_eq!(odds.home.value, 0.0);
    }

    #[test]
    fn two_prices_are_an_unexpected_shape() {
        let payload =
            r#"{"data":{"findPrematchOddsById":{"odds":[{"odds":[{"value":"1.5"},{"value":"2.1"}]}]}}}"#;
        let err = parse(payload).expect_err("two prices");
        assert!(matches!(err, FeedError::UnexpectedOddsShape { len: 2 }));
    }

    #[test]
    fn numeric_json_values_are_accepted() {
        let payload = r#"{"data":{"findPrematchOddsById":{"odds":[{"odds":[{"value":1.5},{"value":2.1},{"value":3.0}]}]}}}"#;
        let odds = parse(payload).expect("valid odds document");
        assert_eq!(odds.middle.value, 1.5);
    }
}
