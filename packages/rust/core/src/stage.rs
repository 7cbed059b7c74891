//! Stage builder: compose several grouped-list producers over a shared base value.
//!
//! Each stage maps the current base value to a [`GroupedList`]; reading
//! [`StageBuilder::groups`] runs every stage in registration order and
//! concatenates their outputs. Nothing is cached, so reassigning the base value
//! is visible to every stage on the next read.
//!
//! Stage functions are assumed total. The builder does not catch panics, and a
//! stage that wants to contribute nothing returns an empty list.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, instrument};

use sections_shared::IndexPath;

use crate::grouped::GroupedList;

/// A registered transformation from the base value to a list of groups.
pub type Stage<B, T> = Rc<dyn Fn(&B) -> GroupedList<T>>;

/// Base value plus an ordered list of stages.
///
/// ```
/// use sections_core::{Group, GroupedList, StageBuilder};
///
/// let mut builder = StageBuilder::new(vec![0])
///     .add_stage(|rows: &Vec<i32>| {
///         let mut rows = rows.clone();
///         rows.push(1);
///         GroupedList::from([Group::new("first", rows)])
///     });
///
/// assert_eq!(builder.groups()[0].items, [0, 1]);
///
/// builder.set_base(vec![9]);
/// assert_eq!(builder.groups()[0].items, [9, 1]);
/// ```
pub struct StageBuilder<B, T> {
    base: B,
    stages: Vec<Stage<B, T>>,
}

impl<B, T> StageBuilder<B, T> {
    /// A builder over `base` with no stages.
    pub fn new(base: B) -> Self {
        Self {
            base,
            stages: Vec::new(),
        }
    }

    /// A new builder with `stage` appended. The receiver is left as it was.
    pub fn add_stage<F>(&self, stage: F) -> Self
    where
        B: Clone,
        F: Fn(&B) -> GroupedList<T> + 'static,
    {
        let mut next = self.clone();
        next.push_stage(stage);
        next
    }

    /// Append `stage` in place.
    pub fn push_stage<F>(&mut self, stage: F)
    where
        F: Fn(&B) -> GroupedList<T> + 'static,
    {
        self.stages.push(Rc::new(stage));
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    /// Replace the base value, returning the previous one. Stages are unchanged.
    pub fn set_base(&mut self, base: B) -> B {
        std::mem::replace(&mut self.base, base)
    }

    /// Run every stage against the current base value and concatenate the
    /// results in registration order.
    #[instrument(level = "debug", skip_all, fields(stages = self.stages.len()))]
    pub fn groups(&self) -> GroupedList<T> {
        let groups: GroupedList<T> = self
            .stages
            .iter()
            .flat_map(|stage| stage(&self.base))
            .collect();
        debug!(groups = groups.len(), "stages evaluated");
        groups
    }

    /// Evaluate the stages and locate the first item equal to `item`.
    pub fn index_path_of(&self, item: &T) -> Option<IndexPath>
    where
        T: PartialEq,
    {
        self.groups().index_path_for(item)
    }
}

impl<B: Clone, T> Clone for StageBuilder<B, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            stages: self.stages.clone(),
        }
    }
}

impl<B: fmt::Debug, T> fmt::Debug for StageBuilder<B, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageBuilder")
            .field("base", &self.base)
            .field("stages", &self.stages.len())
            .finish()
    }
}
