//! # Core Application Logic
//!
//! Browsing, searching, statistics and export. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (selection)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • query / stats        │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    CLI     │
//!            │  Adapter   │            │ subcommands│
//!            │ (ratatui)  │            │  (main.rs) │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `SelectionState`, `View` and the `App` struct
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`query`]: City filter, text search, lookup by name
//! - [`stats`]: Aggregate counts and rankings
//! - [`export`]: JSON export document and atomic file writes
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod export;
pub mod query;
pub mod state;
pub mod stats;

pub use action::{Action, Effect, update};
pub use state::{App, SelectionState, View};
