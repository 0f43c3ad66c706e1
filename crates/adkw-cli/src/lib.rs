//! CLI library components for the ad keyword evaluator.

pub mod logging;
pub mod pipeline;
pub mod render;
