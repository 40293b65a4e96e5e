//! Terminal snake on a fixed, bordered playground.
//!
//! - Core game logic: grid, segment list and the tick engine (game module)
//! - Key-event resolution (input module)
//! - Frame compositing and the ratatui display sink (render module)
//! - Per-session play statistics (metrics module)
//! - The interactive tick loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
