use crate::wire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeaderboardPeriod {
    #[default]
    AllTime,
    /// Current calendar month only.
    Monthly,
}

impl LeaderboardPeriod {
    pub fn path(&self) -> &'static str {
        match self {
            LeaderboardPeriod::AllTime => "/leaderboard",
            LeaderboardPeriod::Monthly => "/leaderboard/monthly",
        }
    }
}

/// A donor's standing, ordered by donation count then total quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "wire::id_string")]
    pub user_id: String,
    pub full_name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    pub donation_count: u32,
    #[serde(default, deserialize_with = "wire::option_f64")]
    pub total_quantity: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_accepts_decimal_totals() {
        let entry: LeaderboardEntry = serde_json::from_value(serde_json::json!({
            "user_id": 3,
            "full_name": "Jane",
            "profile_picture": null,
            "donation_count": 12,
            "total_quantity": "48"
        }))
        .unwrap();
        assert_eq!(entry.total_quantity, Some(48.0));
        assert_eq!(LeaderboardPeriod::Monthly.path(), "/leaderboard/monthly");
    }
}
