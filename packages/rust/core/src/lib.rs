//! Grouped list data model and builders for Sections.
//!
//! This crate holds the container a list or table UI reads from:
//! - [`Group`] / [`GroupedList`] — named buckets of items with two-level lookup
//! - [`Fragments`] — declarative builder for items and groups
//! - [`StageBuilder`] — composes several list producers over a shared base value
//!
//! Nothing here performs I/O; hosts supply values and consume the results.

pub mod fragment;
pub mod group;
pub mod grouped;
pub mod stage;

pub use fragment::{Branches, Fragment, Fragments};
pub use group::Group;
pub use grouped::GroupedList;
pub use stage::{Stage, StageBuilder};

pub use sections_shared::{IndexPath, Result, SectionsError};
