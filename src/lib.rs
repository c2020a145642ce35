//! # Tabrec — Browser Tab Recommendation Service
//!
//! Turns a summary of how a user interacted with a browser tab into a
//! label telling the extension what to do with it.
//!
//! ## Decision rule
//!
//! | Order | Condition | Label |
//! |-------|-----------|-------|
//! | 1 | clicks > 50 or key presses > 50 or scroll depth > 80% | `keep` |
//! | 2 | clicks < 5 and key presses < 5 and scroll depth < 10% | `close` |
//! | 3 | otherwise | `archive` |
//!
//! The rule lives in [`recommendation::recommend`]; thresholds are in
//! [`constants`]. [`scoring`] holds the weighted engagement score the
//! extension uses for its own keep/consider/close verdict.
//!
//! Everything is stateless: each request is evaluated on its own, and the
//! router in [`server`] carries no application state.

pub mod constants;
pub mod env_config;
pub mod recommendation;
pub mod scoring;
pub mod server;
pub mod types;
