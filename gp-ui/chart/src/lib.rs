//! Proportion chart: a horizontal bar split into colored segments.
//!
//! Raw [`ProportionSegment`]s are checked by [`validate`] before anything is
//! drawn. Negative values and segment keys without a [`ColorConfig`] are
//! reported as [`ChartError`]s instead of rendering a misleading bar.

mod data;
mod error;
mod view;

pub use data::{
    ChartColors, ColorConfig, ProportionData, ProportionSegment,
    ResolvedSegment, validate,
};
pub use error::ChartError;
pub use view::ProportionChart;
