//! # Core Application Logic
//!
//! This module contains ArtSpace's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (data)       │
//!                    │  • Navigator (indices)  │
//!                    │  • Store + Action       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ ViewState / dispatch(Action)
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Artwork` and the immutable `Catalog`
//! - [`strings`]: opaque text/image references and the string table
//! - [`navigator`]: next/previous index arithmetic with wraparound
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`state`]: `ViewState` and the `Store` that owns it
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigator;
pub mod state;
pub mod strings;
