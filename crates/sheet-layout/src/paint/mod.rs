//! Painting output.
//!
//! Layout does not touch pixels. It records what to draw in a
//! [`DisplayList`], which the renderer executes in order:
//!
//! ```text
//! Commands → Geometry → Layout → Render
//!                          ↓        ↓
//!                    DisplayList → Pixels
//! ```

mod display_list;

pub use display_list::{Color, DisplayCommand, DisplayList};
