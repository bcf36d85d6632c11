//! Serde models for the MLB Stats API payloads the bot consumes.

pub mod roster;
pub mod schedule;
pub mod standings;

use serde::Deserialize;

/// Minimal team reference embedded in schedule and standings payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    pub id: Option<u32>,
    pub name: Option<String>,
}
