//! Community features: donor leaderboard, feedback and referrals.

mod feedback;
mod leaderboard;
mod referral;

pub use feedback::{Feedback, FeedbackRecord};
pub use leaderboard::{LeaderboardEntry, LeaderboardPeriod};
pub use referral::{Referral, ReferralRecord};
