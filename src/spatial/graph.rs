//! Visibility overlay over the fixed adjacency table
//!
//! Separates the immutable geometry from transient search state. The
//! adjacency rows in [`hexagon`](crate::spatial::hexagon) are never mutated;
//! a bitset overlay records which triangles are currently hidden, and every
//! query answers against the table minus that overlay. Hiding a triangle
//! makes it vanish from every neighbor's visible neighborhood without
//! touching any table row, so a hide followed by its reveal restores the
//! visible state bit for bit.

use crate::algorithm::bitset::TriangleBitset;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::hexagon::{CORNER_TRIANGLES, NEIGHBOR_ROWS, TRIANGLE_COUNT};
use std::fmt;

/// Visible neighbors of a single triangle, at most three entries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    entries: [usize; 3],
    len: usize,
}

impl Neighborhood {
    const fn empty() -> Self {
        Self {
            entries: [0; 3],
            len: 0,
        }
    }

    fn push(&mut self, index: usize) {
        if let Some(slot) = self.entries.get_mut(self.len) {
            *slot = index;
            self.len += 1;
        }
    }

    /// Number of visible neighbors
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Test whether no neighbors are visible
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The visible neighbor indices in table order
    pub fn as_slice(&self) -> &[usize] {
        self.entries.get(..self.len).unwrap_or(&[])
    }

    /// Iterate the visible neighbor indices
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }

    /// Test neighbor membership
    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter().copied()
    }
}

/// Proof that one triangle was hidden and not yet revealed
///
/// Issued by [`TriangleGraph::hide`] and consumed by
/// [`TriangleGraph::reveal`]. The token cannot be cloned or constructed
/// elsewhere, so every reversible hide is paired with exactly one reveal;
/// unbalanced hide/reveal sequences do not typecheck.
#[must_use = "hidden triangles leak unless the token is passed back to reveal"]
#[derive(Debug)]
pub struct HideToken {
    index: usize,
}

impl HideToken {
    /// Triangle index this token refers to
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Adjacency graph of the hexagon with a reversible hidden overlay
///
/// Owns the hidden set exclusively; searches mutate visibility only through
/// [`hide`](Self::hide) and [`reveal`](Self::reveal).
#[derive(Clone, Debug)]
pub struct TriangleGraph {
    hidden: TriangleBitset,
}

impl TriangleGraph {
    /// Create the full side-3 hexagon with every triangle visible
    pub fn hexagon() -> Self {
        Self {
            hidden: TriangleBitset::new(TRIANGLE_COUNT),
        }
    }

    /// Create the radius-1 corner sub-hexagon, six triangles visible
    pub fn corner() -> Self {
        let mut hidden = TriangleBitset::all(TRIANGLE_COUNT);
        for index in CORNER_TRIANGLES {
            hidden.remove(index);
        }
        Self { hidden }
    }

    /// Create the full hexagon with the given triangles pre-hidden
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range or appears twice
    pub fn with_hidden(indices: impl IntoIterator<Item = usize>) -> Result<Self> {
        let mut graph = Self::hexagon();
        graph.exclude(indices)?;
        Ok(graph)
    }

    /// Permanently hide the given triangles, shrinking the region
    ///
    /// Unlike [`hide`](Self::hide) this issues no tokens; excluded triangles
    /// are not expected to come back.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range or already hidden
    pub fn exclude(&mut self, indices: impl IntoIterator<Item = usize>) -> Result<()> {
        for index in indices {
            self.check_hideable(index)?;
            self.hidden.insert(index);
        }
        Ok(())
    }

    /// Test whether a triangle is currently visible
    pub fn is_visible(&self, index: usize) -> bool {
        index < TRIANGLE_COUNT && !self.hidden.contains(index)
    }

    /// Iterate the visible triangle indices in ascending order
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        (0..TRIANGLE_COUNT).filter(|&index| !self.hidden.contains(index))
    }

    /// Number of currently visible triangles
    pub fn visible_count(&self) -> usize {
        TRIANGLE_COUNT - self.hidden.count()
    }

    /// Lowest visible triangle index, if any remain
    pub fn first_visible(&self) -> Option<usize> {
        self.visible().next()
    }

    /// Visible neighborhood of a triangle
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or currently hidden;
    /// querying a hidden triangle is a caller defect, not an empty result
    pub fn neighbors(&self, index: usize) -> Result<Neighborhood> {
        self.check_hideable(index)?;
        Ok(self.visible_row(index))
    }

    /// Test whether any tile placement could still be formed
    ///
    /// True iff some visible triangle has at least two visible neighbors.
    pub fn placement_possible(&self) -> bool {
        self.visible().any(|index| self.visible_row(index).len() >= 2)
    }

    /// Hide a triangle, removing it from every visible neighborhood
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or already hidden
    pub fn hide(&mut self, index: usize) -> Result<HideToken> {
        self.check_hideable(index)?;
        self.hidden.insert(index);
        Ok(HideToken { index })
    }

    /// Reveal a previously hidden triangle, consuming its token
    pub fn reveal(&mut self, token: HideToken) {
        self.hidden.remove(token.index);
    }

    fn check_hideable(&self, index: usize) -> Result<()> {
        if index >= TRIANGLE_COUNT {
            return Err(AlgorithmError::IndexOutOfBounds {
                index,
                triangle_count: TRIANGLE_COUNT,
            });
        }
        if self.hidden.contains(index) {
            return Err(AlgorithmError::HiddenTriangle { index });
        }
        Ok(())
    }

    fn visible_row(&self, index: usize) -> Neighborhood {
        let mut neighborhood = Neighborhood::empty();
        let row = NEIGHBOR_ROWS.get(index).copied().unwrap_or(&[]);
        for &neighbor in row {
            if !self.hidden.contains(neighbor) {
                neighborhood.push(neighbor);
            }
        }
        neighborhood
    }
}

impl fmt::Display for TriangleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in self.visible() {
            write!(f, "{index} -> {{")?;
            for (position, neighbor) in self.visible_row(index).iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{neighbor}")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
