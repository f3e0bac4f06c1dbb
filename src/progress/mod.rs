//! Progress module containing progress bar functionality and the shared
//! completion counter.
//!
//! The progress module is organized into three components:
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Progress bar display management and coordination
//! - `counter` - The shared completed/total accounting used by the workers

pub(crate) mod counter;
pub(crate) mod display;
pub(crate) mod style;

pub use counter::ProgressCounter;
pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
