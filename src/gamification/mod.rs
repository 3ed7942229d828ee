//! Points, streaks, badges and leaderboards.

pub mod actions;
pub mod badges;
pub mod leaderboard;
pub mod ledger;
pub mod streak;
