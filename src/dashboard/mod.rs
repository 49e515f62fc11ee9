//! Dashboard UI
//!
//! Layout, reactive wiring and HTML rendering of the launch dashboard.
//!
//! - `layout`: Component tree (dropdown, slider, chart slots)
//! - `callbacks`: Which inputs recompute which charts
//! - `page`: HTML document with the embedded page script

pub mod callbacks;
pub mod layout;
pub mod page;

pub use callbacks::{dashboard_callbacks, triggered_by, Callback, Dependency};
pub use layout::{dashboard_layout, Component, InputValue, Layout};
pub use page::render_page;
