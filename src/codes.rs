//! Field-code tables for the provider's feed streams. The wire codes are
//! short opaque identifiers; every interpreter goes through the names
//! defined here rather than scattering the literals.

/// Trailing padding record carried by the stats and history feeds.
pub const SENTINEL: &str = "A1";

pub mod general {
    /// Kickoff as a unix timestamp.
    pub const KICKOFF: &str = "DC";
    pub const STATUS: &str = "DA";
    pub const HOME_SCORE: &str = "DE";
    pub const AWAY_SCORE: &str = "DF";
}

pub mod stats {
    /// Section marker; its value names the bucket the following rows
    /// belong to.
    pub const SECTION: &str = "SE";
    pub const NAME: &str = "SG";
    pub const HOME_VALUE: &str = "SH";
    pub const AWAY_VALUE: &str = "SI";

    pub const SECTION_MATCH: &str = "Match";
    pub const SECTION_FIRST_HALF: &str = "1st Half";
    pub const SECTION_SECOND_HALF: &str = "2nd Half";
}

pub mod events {
    /// Present on detail rows only; rows without it are period/container
    /// headers and carry no event.
    pub const DETAIL: &str = "III";
    pub const KIND: &str = "IK";
    pub const TIME: &str = "IB";
    pub const PLAYER: &str = "IF";
    pub const PLAYER_URL: &str = "IU";
    /// Second occurrence of the player fields within one row, as stored
    /// by the decoder's collision rule.
    pub const SECOND_PLAYER: &str = "IF_2";
    pub const SECOND_PLAYER_URL: &str = "IU_2";
    pub const HOME_SCORE: &str = "INX";
    pub const AWAY_SCORE: &str = "IOX";
    pub const NOTE: &str = "TL";

    pub const KIND_GOAL: &str = "Goal";
    pub const KIND_SUBSTITUTION_IN: &str = "Substitution - in";
    pub const KIND_SUBSTITUTION_OUT: &str = "Substitution - Out";
    pub const KIND_YELLOW_CARD: &str = "Yellow Card";
}

pub mod history {
    /// Section marker; each occurrence starts the next bucket
    /// (home, away, head-to-head).
    pub const SECTION: &str = "KB";
    /// Required on every data row; rows without it are padding.
    pub const MATCH_ID: &str = "KP";
    pub const KICKOFF: &str = "KC";
    pub const HOME_NAME: &str = "FH";
    pub const AWAY_NAME: &str = "FK";
    pub const HOME_SCORE: &str = "KU";
    pub const AWAY_SCORE: &str = "KT";
    pub const LEAGUE: &str = "KF";
    pub const COUNTRY: &str = "KH";
    pub const FINAL_SCORE: &str = "KL";
    pub const MAIN_TEAM: &str = "KS";
    pub const RESULT: &str = "KN";
}
