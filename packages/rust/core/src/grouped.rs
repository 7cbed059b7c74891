//! The grouped list container.
//!
//! A [`GroupedList`] behaves like an ordered, index-addressable,
//! range-replaceable sequence of [`Group`]s, and adds two-level lookup from an
//! item value back to its [`IndexPath`].

use std::ops::{Add, AddAssign, Bound, Index, IndexMut, RangeBounds};

use serde::{Deserialize, Serialize};
use tracing::trace;

use sections_shared::{IndexPath, Result, SectionsError};

use crate::fragment::Fragments;
use crate::group::Group;

/// Ordered sequence of groups. Owns its groups by value: a clone is fully
/// independent of its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedList<T> {
    groups: Vec<Group<T>>,
}

impl<T> Default for GroupedList<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T> GroupedList<T> {
    /// An empty list with zero groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the groups with the fragment builder.
    ///
    /// ```
    /// use sections_core::GroupedList;
    ///
    /// let signed_in = true;
    /// let list = GroupedList::build(|groups| {
    ///     groups
    ///         .group("General", |rows| rows.item("About"))
    ///         .if_else(
    ///             signed_in,
    ///             |g| g.group("Account", |rows| rows.item("Sign out")),
    ///             |g| g.group("Account", |rows| rows.item("Sign in")),
    ///         )
    /// });
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list[1].items, ["Sign out"]);
    /// ```
    pub fn build<F>(groups: F) -> Self
    where
        F: FnOnce(Fragments<Group<T>>) -> Fragments<Group<T>>,
    {
        Self::from(groups(Fragments::new()).build())
    }

    /// Number of groups (not items).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of items across every group.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn get(&self, index: usize) -> Result<&Group<T>> {
        let count = self.groups.len();
        self.groups
            .get(index)
            .ok_or(SectionsError::OutOfRange { index, count })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Group<T>> {
        let count = self.groups.len();
        self.groups
            .get_mut(index)
            .ok_or(SectionsError::OutOfRange { index, count })
    }

    /// Replace the group at `index`, returning the one it displaced.
    pub fn set(&mut self, index: usize, group: Group<T>) -> Result<Group<T>> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, group))
    }

    pub fn push(&mut self, group: Group<T>) {
        self.groups.push(group);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group<T>> {
        self.groups.iter()
    }

    pub fn as_slice(&self) -> &[Group<T>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Group<T>> {
        self.groups
    }

    /// Replace the groups in `range` with `groups`, shifting later groups.
    ///
    /// An empty range inserts; the full range replaces everything. Returns the
    /// removed groups. Fails when the range is reversed or ends past `len()`.
    pub fn replace_range<R, I>(&mut self, range: R, groups: I) -> Result<Vec<Group<T>>>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = Group<T>>,
    {
        let count = self.groups.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => count,
        };

        if start > end || end > count {
            return Err(SectionsError::InvalidRange { start, end, count });
        }

        let removed: Vec<_> = self.groups.splice(start..end, groups).collect();
        trace!(
            start,
            end,
            removed = removed.len(),
            count = self.groups.len(),
            "replaced group range"
        );
        Ok(removed)
    }

    /// Position of the first item equal to `item`, scanning groups in order and
    /// items within each group in order. `None` when nothing matches.
    pub fn index_path_for(&self, item: &T) -> Option<IndexPath>
    where
        T: PartialEq,
    {
        self.groups.iter().enumerate().find_map(|(group, candidates)| {
            candidates
                .position(item)
                .map(|position| IndexPath::new(group, position))
        })
    }

    /// The item at `path`, if both indices are in range.
    pub fn item_at(&self, path: IndexPath) -> Option<&T> {
        self.groups.get(path.group)?.items.get(path.item)
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<T> From<Vec<Group<T>>> for GroupedList<T> {
    fn from(groups: Vec<Group<T>>) -> Self {
        Self { groups }
    }
}

impl<T, const N: usize> From<[Group<T>; N]> for GroupedList<T> {
    fn from(groups: [Group<T>; N]) -> Self {
        Self {
            groups: groups.into(),
        }
    }
}

impl<T> FromIterator<Group<T>> for GroupedList<T> {
    fn from_iter<I: IntoIterator<Item = Group<T>>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Group<T>> for GroupedList<T> {
    fn extend<I: IntoIterator<Item = Group<T>>>(&mut self, iter: I) {
        self.groups.extend(iter);
    }
}

/// Literal construction: `grouped!["name" => [items...], ...]`.
///
/// ```
/// use sections_core::grouped;
///
/// let list = grouped![
///     "odd" => [1, 3],
///     "even" => [2],
/// ];
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[0].name(), "odd");
/// ```
#[macro_export]
macro_rules! grouped {
    () => {
        $crate::GroupedList::new()
    };
    ($($name:expr => [$($item:expr),* $(,)?]),+ $(,)?) => {
        $crate::GroupedList::from(::std::vec![
            $($crate::Group::new($name, ::std::vec![$($item),*])),+
        ])
    };
}

// ---------------------------------------------------------------------------
// Indexing and iteration
// ---------------------------------------------------------------------------

impl<T> Index<usize> for GroupedList<T> {
    type Output = Group<T>;

    /// Panics when `index >= len()`; use [`GroupedList::get`] to get an error instead.
    fn index(&self, index: usize) -> &Group<T> {
        &self.groups[index]
    }
}

impl<T> IndexMut<usize> for GroupedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Group<T> {
        &mut self.groups[index]
    }
}

impl<T> IntoIterator for GroupedList<T> {
    type Item = Group<T>;
    type IntoIter = std::vec::IntoIter<Group<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GroupedList<T> {
    type Item = &'a Group<T>;
    type IntoIter = std::slice::Iter<'a, Group<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GroupedList<T> {
    type Item = &'a mut Group<T>;
    type IntoIter = std::slice::IterMut<'a, Group<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter_mut()
    }
}

// ---------------------------------------------------------------------------
// Concatenation
// ---------------------------------------------------------------------------

impl<T> Add for GroupedList<T> {
    type Output = GroupedList<T>;

    fn add(mut self, rhs: GroupedList<T>) -> GroupedList<T> {
        self.groups.extend(rhs.groups);
        self
    }
}

impl<T: Clone> Add for &GroupedList<T> {
    type Output = GroupedList<T>;

    fn add(self, rhs: Self) -> GroupedList<T> {
        self.iter().chain(rhs.iter()).cloned().collect()
    }
}

impl<T> AddAssign for GroupedList<T> {
    fn add_assign(&mut self, rhs: GroupedList<T>) {
        self.groups.extend(rhs.groups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        value: i32,
    }

    fn row(value: i32) -> Row {
        Row { value }
    }

    #[test]
    fn construct_from_groups() {
        let list = GroupedList::from(vec![
            Group::new("A section", vec![row(100)]),
            Group::new("Another section", vec![row(101), row(102)]),
        ]);

        assert_eq!(list.len(), 2);
        assert_eq!(list.total_items(), 3);
        assert_eq!(list[0].name(), "A section");
        assert_eq!(list[0].items, vec![row(100)]);
        assert_eq!(list[1].name(), "Another section");
        assert_eq!(list[1].items, vec![row(101), row(102)]);
    }

    #[test]
    fn non_equatable_items() {
        struct Opaque {
            pair: (i32, i32),
        }

        let list = GroupedList::from([Group::new(
            "THE SECTION",
            vec![Opaque { pair: (-1, 1) }, Opaque { pair: (i32::MAX, 1234) }],
        )]);

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].items[0].pair, (-1, 1));
        assert_eq!(list[0].items[1].pair, (i32::MAX, 1234));
        assert_eq!(list.item_at(IndexPath::new(0, 1)).map(|o| o.pair.1), Some(1234));
    }

    #[test]
    fn empty_list() {
        let list: GroupedList<Row> = GroupedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.index_path_for(&row(0)), None);
        let literal: GroupedList<Row> = grouped![];
        assert_eq!(literal, list);
    }

    #[test]
    fn get_and_set_enforce_bounds() {
        let mut list = grouped!["A" => [row(1)], "B" => [row(2)]];

        assert!(list.get(1).is_ok());
        assert!(matches!(
            list.get(2),
            Err(SectionsError::OutOfRange { index: 2, count: 2 })
        ));

        let err = list.set(5, Group::new("C", vec![])).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name(), "B");
    }

    #[test]
    fn set_replaces_only_target() {
        let mut list = grouped![
            "A" => [row(1), row(11)],
            "B" => [row(2)],
        ];

        let old = list
            .set(1, Group::new("B prime", vec![row(22), row(222)]))
            .expect("in range");

        assert_eq!(old.name(), "B");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().items, vec![row(22), row(222)]);
        assert_eq!(list.get(0).unwrap().items, vec![row(1), row(11)]);
    }

    #[test]
    fn copies_are_independent() {
        let mut list = grouped!["A" => [row(1), row(11)], "B" => [row(2)]];

        let mut first = list[0].clone();
        first.items[1].value = 111;
        assert_eq!(list[0].items[1], row(11));

        let snapshot = list.clone();
        list.set(0, Group::new("S", vec![row(5)])).unwrap();
        list[1].items.push(row(3));
        list.replace_range(.., []).unwrap();

        assert!(list.is_empty());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name(), "A");
        assert_eq!(snapshot[1].items, vec![row(2)]);
    }

    #[test]
    fn index_path_for_returns_first_match() {
        let list = grouped![
            "one" => [row(0), row(1), row(0)],
            "two" => [row(0), row(2), row(0)],
        ];

        assert_eq!(list.index_path_for(&row(0)), Some(IndexPath::new(0, 0)));
        assert_eq!(list.index_path_for(&row(1)), Some(IndexPath::new(0, 1)));
        assert_eq!(list.index_path_for(&row(2)), Some(IndexPath::new(1, 1)));
        assert_eq!(list.index_path_for(&row(3)), None);
    }

    #[test]
    fn item_at_resolves_index_paths() {
        let list = grouped!["x" => ["a", "b"], "y" => ["c"]];

        for value in ["a", "b", "c"] {
            let path = list.index_path_for(&value).expect("present");
            assert_eq!(list.item_at(path), Some(&value));
        }
        assert_eq!(list.item_at(IndexPath::new(1, 1)), None);
        assert_eq!(list.item_at(IndexPath::new(2, 0)), None);
    }

    #[test]
    fn iteration_is_ordered_and_restartable() {
        let list = grouped!["x" => [row(2), row(3)], "y" => [row(5)]];

        let mut names = String::new();
        let mut product = 1;
        for group in &list {
            names.push_str(group.name());
            for item in &group.items {
                product *= item.value;
            }
        }
        assert_eq!(names, "xy");
        assert_eq!(product, 30);

        let again: Vec<&str> = list.iter().map(Group::name).collect();
        assert_eq!(again, ["x", "y"]);
    }

    #[test]
    fn concatenation_preserves_order() {
        let a = grouped!["a1" => [1], "a2" => [2]];
        let b = grouped!["b1" => [3]];

        let joined = &a + &b;
        assert_eq!(joined.len(), a.len() + b.len());
        let names: Vec<&str> = joined.iter().map(Group::name).collect();
        assert_eq!(names, ["a1", "a2", "b1"]);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);

        let mut owned = a.clone() + b.clone();
        owned += GroupedList::new();
        assert_eq!(owned, joined);
    }

    #[test]
    fn replace_range_shrinks_list() {
        let mut list = grouped![
            "p" => [row(2)],
            "q" => [row(4)],
            "r" => [row(6)],
        ];

        let removed = list
            .replace_range(0..2, [Group::new("s", vec![row(8), row(0)])])
            .expect("valid range");

        assert_eq!(removed.len(), 2);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name(), "s");
        assert_eq!(list[0].items, vec![row(8), row(0)]);
        assert_eq!(list[1].name(), "r");
        assert_eq!(list[1].items, vec![row(6)]);
    }

    #[test]
    fn replace_range_empty_range_inserts() {
        let mut list = grouped!["a" => [1], "c" => [3]];
        list.replace_range(1..1, [Group::new("b", vec![2])]).unwrap();
        list.replace_range(3..3, [Group::new("d", vec![4])]).unwrap();

        let names: Vec<&str> = list.iter().map(Group::name).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn replace_range_full_range_replaces() {
        let mut list = grouped!["a" => [1], "b" => [2]];
        list.replace_range(..=1, [Group::new("z", vec![9])]).unwrap();
        assert_eq!(list, grouped!["z" => [9]]);
    }

    #[test]
    fn replace_range_rejects_bad_bounds() {
        let mut list = grouped!["a" => [1], "b" => [2]];

        let past_end = list.replace_range(1..3, []).unwrap_err();
        assert!(matches!(
            past_end,
            SectionsError::InvalidRange {
                start: 1,
                end: 3,
                count: 2
            }
        ));

        #[allow(clippy::reversed_empty_ranges)]
        let reversed = list.replace_range(2..1, []).unwrap_err();
        assert!(reversed.is_out_of_range());

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn build_with_fragments() {
        let list: GroupedList<i32> = GroupedList::build(|groups| {
            groups
                .group("first", |rows| rows.item(1))
                .branches(|c| {
                    c.when(false, |g| g.group("never", |rows| rows))
                        .otherwise(|g| g.group("fallback", |rows| rows.item(2).item(3)))
                })
                .each(["x", "y"], |g, name| g.group(name, |rows| rows))
        });

        let names: Vec<&str> = list.iter().map(Group::name).collect();
        assert_eq!(names, ["first", "fallback", "x", "y"]);
        assert_eq!(list.index_path_for(&3), Some(IndexPath::new(1, 1)));
    }

    #[test]
    fn serializes_as_array_of_groups() {
        let list = grouped!["g" => [9], "G" => [6]];
        let json = serde_json::to_string(&list).expect("serialize");
        assert_eq!(
            json,
            r#"[{"name":"g","items":[9]},{"name":"G","items":[6]}]"#
        );
        let parsed: GroupedList<i32> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, list);
    }
}
