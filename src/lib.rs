//! MLB statistics Telegram bot.
//!
//! Presents Major League Baseball schedules, standings, team details, and
//! rosters as text messages navigated with inline buttons. All data comes
//! from the public MLB Stats API per interaction; nothing is stored.

pub mod handlers;
pub mod keyboards;
pub mod messages;
pub mod model;
pub mod reference;
pub mod router;
pub mod statsapi;
pub mod timefmt;
