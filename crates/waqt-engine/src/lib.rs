//! The waqt calculation engine.
//!
//! Orchestrates the solar geometry of `waqt-astronomy` into the nine daily
//! times: method presets, the settings resolver, the iterative solver with
//! its high-latitude policy layer, and post-processing down to seconds.

pub mod compute;
pub mod method;
pub mod settings;
pub mod timezone;

pub use compute::compute;
pub use method::method_config;
pub use settings::Settings;
pub use timezone::{timezone_offset, timezone_offset_for_date};
