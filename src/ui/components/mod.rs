//! Reusable markup primitives.
//!
//! Each component renders to a `String` of HTML. Callers pass trusted markup
//! for content slots; user-provided text goes through [`crate::ui::escape`].
//!
//! # Components
//!
//! - [`progress_bar`]: Track with a proportional fill
//! - [`button`], [`link_button`]: Buttons with variants and sizes
//! - [`alert_destructive`]: Error alert box
//! - [`icons`]: Inline SVG icons

mod alert;
mod button;
pub mod icons;
mod progress;

pub use alert::alert_destructive;
pub use button::{ButtonSize, ButtonVariant, button, link_button};
pub use progress::progress_bar;
