//! EcoQuest: a terminal eco-arcade.
//!
//! Two mini-games built on one session engine: Ocean Cleanup (catch
//! falling trash from a boat) and Forest Fire (contain a spreading
//! grid fire). Sessions earn eco-points credited to a persistent
//! ledger.

pub mod achievements;
pub mod build_info;
pub mod engine;
pub mod games;
pub mod ledger;
pub mod ui;
