//! Wellness check-in analytics.

pub mod analysis;
