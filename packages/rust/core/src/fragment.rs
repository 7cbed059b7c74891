//! Declarative fragment builder.
//!
//! Callers describe a sequence as literal items, sequential blocks, loops and
//! conditionals; the builder records each piece as a [`Fragment`] descriptor and
//! [`Fragment::flatten`] folds the descriptors into a single `Vec` in source order.
//!
//! The same grammar drives both levels of a grouped list: `Fragments<T>` builds
//! the items of one group, `Fragments<Group<T>>` builds the groups of a list
//! through its `group` method.
//!
//! ```
//! use sections_core::Fragments;
//!
//! let show_b = true;
//! let items = Fragments::new()
//!     .item("a")
//!     .if_then(show_b, |f| f.item("b").item("c"))
//!     .item("d")
//!     .build();
//! assert_eq!(items, ["a", "b", "c", "d"]);
//! ```

// ---------------------------------------------------------------------------
// Fragment descriptors
// ---------------------------------------------------------------------------

/// One recorded piece of a builder block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<E> {
    /// A literal expression contributing exactly one element.
    Item(E),
    /// Sibling fragments, concatenated in order.
    Block(Vec<Fragment<E>>),
    /// The taken `if` arm of a conditional.
    First(Box<Fragment<E>>),
    /// The taken `else` arm of a conditional.
    Second(Box<Fragment<E>>),
    /// A conditional with no taken arm.
    Empty,
}

impl<E> Fragment<E> {
    /// Fold the descriptor tree into its elements, depth-first, left-to-right.
    pub fn flatten(self) -> Vec<E> {
        let mut out = Vec::new();
        let mut pending = vec![self];

        while let Some(fragment) = pending.pop() {
            match fragment {
                Fragment::Item(element) => out.push(element),
                // Reversed so the leftmost child is popped first.
                Fragment::Block(children) => pending.extend(children.into_iter().rev()),
                Fragment::First(inner) | Fragment::Second(inner) => pending.push(*inner),
                Fragment::Empty => {}
            }
        }

        out
    }

    /// Wrap in `depth` levels of `Second`, the shape of an `else if` ladder.
    fn nest_second(self, depth: usize) -> Self {
        (0..depth).fold(self, |inner, _| Fragment::Second(Box::new(inner)))
    }
}

// ---------------------------------------------------------------------------
// Fragments builder
// ---------------------------------------------------------------------------

/// Builder object recording a block of fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments<E> {
    parts: Vec<Fragment<E>>,
}

impl<E> Default for Fragments<E> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<E> Fragments<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one literal element.
    pub fn item(mut self, item: E) -> Self {
        self.parts.push(Fragment::Item(item));
        self
    }

    /// Append every element of `items`, in iteration order.
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.parts.extend(items.into_iter().map(Fragment::Item));
        self
    }

    /// Loop: run `body` once per element of `iter`, each run contributing a block.
    pub fn each<I, F>(mut self, iter: I, mut body: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(Fragments<E>, I::Item) -> Fragments<E>,
    {
        let blocks = iter
            .into_iter()
            .map(|element| body(Fragments::new(), element).into_fragment())
            .collect();
        self.parts.push(Fragment::Block(blocks));
        self
    }

    /// Nested sequential block.
    pub fn block<F>(mut self, body: F) -> Self
    where
        F: FnOnce(Fragments<E>) -> Fragments<E>,
    {
        self.parts.push(body(Fragments::new()).into_fragment());
        self
    }

    /// `if cond { then }` with no `else`. `then` only runs when `cond` holds.
    pub fn if_then<F>(mut self, cond: bool, then: F) -> Self
    where
        F: FnOnce(Fragments<E>) -> Fragments<E>,
    {
        let fragment = if cond {
            then(Fragments::new()).into_fragment()
        } else {
            Fragment::Empty
        };
        self.parts.push(fragment);
        self
    }

    /// `if cond { then } else { otherwise }`. Only the selected arm runs.
    pub fn if_else<F, G>(mut self, cond: bool, then: F, otherwise: G) -> Self
    where
        F: FnOnce(Fragments<E>) -> Fragments<E>,
        G: FnOnce(Fragments<E>) -> Fragments<E>,
    {
        let fragment = if cond {
            Fragment::First(Box::new(then(Fragments::new()).into_fragment()))
        } else {
            Fragment::Second(Box::new(otherwise(Fragments::new()).into_fragment()))
        };
        self.parts.push(fragment);
        self
    }

    /// `if / else if / ... / else` chain.
    ///
    /// ```
    /// use sections_core::Fragments;
    ///
    /// let (a, b) = (false, true);
    /// let items = Fragments::new()
    ///     .branches(|chain| {
    ///         chain
    ///             .when(a, |f| f.item(1))
    ///             .when(b, |f| f.item(2))
    ///             .otherwise(|f| f.item(3))
    ///     })
    ///     .build();
    /// assert_eq!(items, [2]);
    /// ```
    pub fn branches<F, R>(mut self, chain: F) -> Self
    where
        F: FnOnce(Branches<E>) -> R,
        R: Into<Fragment<E>>,
    {
        self.parts.push(chain(Branches::new()).into());
        self
    }

    /// Append a prebuilt descriptor.
    pub fn fragment(mut self, fragment: Fragment<E>) -> Self {
        self.parts.push(fragment);
        self
    }

    pub fn into_fragment(self) -> Fragment<E> {
        Fragment::Block(self.parts)
    }

    /// Flatten everything recorded so far.
    pub fn build(self) -> Vec<E> {
        self.into_fragment().flatten()
    }
}

impl<E> From<Fragments<E>> for Fragment<E> {
    fn from(fragments: Fragments<E>) -> Self {
        fragments.into_fragment()
    }
}

// ---------------------------------------------------------------------------
// Conditional chains
// ---------------------------------------------------------------------------

/// An in-progress `if / else if` chain. The first arm whose condition holds is
/// selected; later arms are skipped without running their bodies.
#[derive(Debug)]
pub struct Branches<E> {
    arms: usize,
    selected: Option<Fragment<E>>,
}

impl<E> Branches<E> {
    fn new() -> Self {
        Self {
            arms: 0,
            selected: None,
        }
    }

    /// `if cond { body }` / `else if cond { body }`.
    pub fn when<F>(mut self, cond: bool, body: F) -> Self
    where
        F: FnOnce(Fragments<E>) -> Fragments<E>,
    {
        if self.selected.is_none() && cond {
            let taken = Fragment::First(Box::new(body(Fragments::new()).into_fragment()));
            self.selected = Some(taken.nest_second(self.arms));
        }
        self.arms += 1;
        self
    }

    /// Final `else { body }`, closing the chain.
    pub fn otherwise<F>(self, body: F) -> Fragment<E>
    where
        F: FnOnce(Fragments<E>) -> Fragments<E>,
    {
        match self.selected {
            Some(taken) => taken,
            None => body(Fragments::new()).into_fragment().nest_second(self.arms),
        }
    }
}

impl<E> From<Branches<E>> for Fragment<E> {
    /// A chain left open with no taken arm contributes nothing.
    fn from(branches: Branches<E>) -> Self {
        branches.selected.unwrap_or(Fragment::Empty)
    }
}
