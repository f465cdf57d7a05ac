//! # Core Application Logic
//!
//! This module contains barcart's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Catalog + index      │
//!                    │  • Wheel plan/reveal    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  recipes   │      │  firebase  │
//!     │  Adapter   │      │ (HTTP API) │      │ (store +   │
//!     │ (ratatui)  │      │            │      │  assets)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`index`]: `Entry`, `SortedEntryList`, `LetterIndex`: jump-to-letter
//! - [`catalog`]: the list + index pair, filtered views, jump targets
//! - [`wheel`]: personality wheel draws and reveals
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: layered configuration

pub mod action;
pub mod catalog;
pub mod config;
pub mod index;
pub mod state;
pub mod wheel;
