#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod config;
pub mod controller;
pub mod derived;
pub mod error;
pub mod grid;
pub mod layout;
pub mod localization;
pub mod month;
pub mod provider;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::config::{CalendarConfig, GridMetrics};
pub use crate::controller::{CalendarRecordList, ScrollSource, SyncAction};
pub use crate::derived::DerivedGrid;
pub use crate::error::{ConfigurationError, DateArithmeticError, Error, Result};
pub use crate::grid::{DateGrid, DisplayRange, RecordRange};
pub use crate::layout::{GridLayout, LayoutAttribute, Rect, Size};
pub use crate::month::MonthSegment;
pub use crate::provider::RecordProvider;
