//! A named, ordered bucket of items.

use serde::{Deserialize, Serialize};

use crate::fragment::Fragments;

/// One group of a [`GroupedList`](crate::GroupedList), typically rendered as a
/// list section.
///
/// The name is fixed at construction; the items are freely mutable. Cloning
/// copies the items, so a clone never shares state with its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group<T> {
    name: String,
    /// Items in display order. Duplicates are allowed.
    pub items: Vec<T>,
}

impl<T> Group<T> {
    pub fn new(name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Build the items with the fragment builder.
    ///
    /// ```
    /// use sections_core::Group;
    ///
    /// let admin = false;
    /// let group = Group::build("Account", |rows| {
    ///     rows.item("Profile")
    ///         .if_then(admin, |rows| rows.item("Billing"))
    ///         .item("Sign out")
    /// });
    /// assert_eq!(group.items, ["Profile", "Sign out"]);
    /// ```
    pub fn build<F>(name: impl Into<String>, items: F) -> Self
    where
        F: FnOnce(Fragments<T>) -> Fragments<T>,
    {
        Self::new(name, items(Fragments::new()).build())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Index of the first item equal to `item`.
    pub fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|candidate| candidate == item)
    }
}

impl<T> Fragments<Group<T>> {
    /// Append a group whose items come from a nested item-level block.
    pub fn group<F>(self, name: impl Into<String>, items: F) -> Self
    where
        F: FnOnce(Fragments<T>) -> Fragments<T>,
    {
        self.item(Group::build(name, items))
    }
}
