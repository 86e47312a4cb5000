//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: artwork title
//! - `ArtworkFrame`: framed image placeholder that follows the drag
//! - `NavRow`: `<` button, artist and year, `>` button
//! - `StatusBar`: catalog position and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `GestureTracker`: turns key/mouse events into core actions
//!
//! Components receive external data as props, never by reaching into the
//! store, so each one renders in a `TestBackend` without a full app.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── artwork_frame.rs
//! ├── nav_row.rs
//! ├── status_bar.rs
//! └── gesture.rs
//! ```

pub mod artwork_frame;
pub mod gesture;
pub mod nav_row;
pub mod status_bar;
mod title_bar;

pub use artwork_frame::ArtworkFrame;
pub use gesture::GestureTracker;
pub use nav_row::{NavButton, NavRow};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
