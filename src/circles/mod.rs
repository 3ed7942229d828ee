//! Study circle domain logic.

pub mod matching;
