//! The percolation model: an n-by-n grid of sites over a union-find.
//!
//! Each site is either blocked or open. Open sites that are 4-neighbour
//! adjacent belong to the same union-find component. Instead of the two
//! virtual top/bottom nodes found in textbook implementations, every
//! component carries a [`SiteStatus`] flag set at its root:
//!
//! | Bit | Meaning |
//! |---|---|
//! | `OPEN` | the component contains an open site |
//! | `CONNECTED_TOP` | the component touches row 1 |
//! | `CONNECTED_BOTTOM` | the component touches row n |
//!
//! The grid percolates as soon as some root holds all three bits, which
//! is detected in O(α(n²)) per [`open`](PercolationGrid::open) without
//! scanning the grid.
//!
//! # Root-only flags
//!
//! After a union, only the flags stored at the surviving root are
//! authoritative. Flags at a non-root index are whatever was written
//! when that site was opened and are never read for full/percolation
//! checks; those always resolve through [`UnionFind::find`].

use std::ops::{BitOr, BitOrAssign};

use tracing::trace;

use crate::collections::UnionFind;
use crate::error::{PercolationError, Result};

/// 3-bit flag set attached to a site or component root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SiteStatus(u8);

impl SiteStatus {
    pub const BLOCKED: SiteStatus = SiteStatus(0b000);
    pub const OPEN: SiteStatus = SiteStatus(0b001);
    pub const CONNECTED_TOP: SiteStatus = SiteStatus(0b010);
    pub const CONNECTED_BOTTOM: SiteStatus = SiteStatus(0b100);

    /// Open and linked to the top row.
    pub const FULL: SiteStatus = SiteStatus(0b011);
    /// Open and linked to both the top and bottom rows.
    pub const PERCOLATING: SiteStatus = SiteStatus(0b111);

    /// Returns `true` if every bit of `other` is set in `self`.
    pub const fn contains(self, other: SiteStatus) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw bit pattern.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for SiteStatus {
    type Output = SiteStatus;

    fn bitor(self, rhs: SiteStatus) -> SiteStatus {
        SiteStatus(self.0 | rhs.0)
    }
}

impl BitOrAssign for SiteStatus {
    fn bitor_assign(&mut self, rhs: SiteStatus) {
        self.0 |= rhs.0;
    }
}

/// An n-by-n site-percolation grid with 1-indexed rows and columns.
///
/// # Examples
/// ```
/// use u_percolation::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(2).unwrap();
/// grid.open(1, 1).unwrap();
/// assert!(!grid.percolates());
/// grid.open(2, 1).unwrap();
/// assert!(grid.percolates());
/// assert!(grid.is_full(2, 1).unwrap());
/// assert!(!grid.is_open(2, 2).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    size: usize,
    union_find: UnionFind,
    site_status: Vec<SiteStatus>,
    open_count: usize,
    percolated: bool,
}

impl PercolationGrid {
    /// Creates an n-by-n grid with every site blocked.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n <= 0`.
    pub fn new(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size must be positive, got {n}"
            )));
        }
        let size = usize::try_from(n).map_err(|_| {
            PercolationError::InvalidArgument(format!("grid size {n} does not fit in memory"))
        })?;
        let sites = size.checked_mul(size).ok_or_else(|| {
            PercolationError::InvalidArgument(format!("grid size {n} overflows site count"))
        })?;

        Ok(Self {
            size,
            union_find: UnionFind::new(sites),
            site_status: vec![SiteStatus::BLOCKED; sites],
            open_count: 0,
            percolated: false,
        })
    }

    /// Grid dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Opens site `(row, col)` if it is not open already.
    ///
    /// Opening an already-open site is a no-op.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `row` or `col` is outside `[1, n]`.
    pub fn open(&mut self, row: i64, col: i64) -> Result<()> {
        let p = self.index(row, col)?;
        if self.site_status[p].contains(SiteStatus::OPEN) {
            return Ok(());
        }

        let mut status = SiteStatus::OPEN;
        if row == 1 {
            status |= SiteStatus::CONNECTED_TOP;
        }
        if row == self.size as i64 {
            status |= SiteStatus::CONNECTED_BOTTOM;
        }
        self.site_status[p] = status;

        for (r, c) in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)] {
            status |= self.merge_neighbor(p, r, c);
        }

        // Unions above may have moved the root; write the merged flags once.
        let root = self.union_find.find(p);
        self.site_status[root] = status;
        self.open_count += 1;

        if !self.percolated && status.contains(SiteStatus::PERCOLATING) {
            self.percolated = true;
            trace!(
                size = self.size,
                open_sites = self.open_count,
                "grid percolates"
            );
        }
        Ok(())
    }

    /// Returns `true` if site `(row, col)` is open.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `row` or `col` is outside `[1, n]`.
    pub fn is_open(&self, row: i64, col: i64) -> Result<bool> {
        let p = self.index(row, col)?;
        Ok(self.site_status[p].contains(SiteStatus::OPEN))
    }

    /// Returns `true` if site `(row, col)` is open and linked to the top
    /// row through a chain of open sites.
    ///
    /// Takes `&mut self` because the root lookup compresses paths.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `row` or `col` is outside `[1, n]`.
    pub fn is_full(&mut self, row: i64, col: i64) -> Result<bool> {
        let p = self.index(row, col)?;
        let root = self.union_find.find(p);
        Ok(self.site_status[root].contains(SiteStatus::FULL))
    }

    /// Number of sites opened so far.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` once some chain of open sites links the top and
    /// bottom rows. Never reverts to `false`.
    pub fn percolates(&self) -> bool {
        self.percolated
    }

    /// Fraction of sites currently open, in `[0, 1]`.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.site_status.len() as f64
    }

    /// Unions `p` with the neighbour at `(row, col)` if it exists and is
    /// open, returning the neighbour's root flags as they were before the
    /// union. Missing or blocked neighbours contribute nothing.
    fn merge_neighbor(&mut self, p: usize, row: i64, col: i64) -> SiteStatus {
        let Some(q) = self.checked_index(row, col) else {
            return SiteStatus::BLOCKED;
        };
        if !self.site_status[q].contains(SiteStatus::OPEN) {
            return SiteStatus::BLOCKED;
        }
        let neighbor = self.site_status[self.union_find.find(q)];
        self.union_find.union(p, q);
        neighbor
    }

    fn checked_index(&self, row: i64, col: i64) -> Option<usize> {
        let n = self.size as i64;
        if (1..=n).contains(&row) && (1..=n).contains(&col) {
            Some(((row - 1) * n + (col - 1)) as usize)
        } else {
            None
        }
    }

    fn index(&self, row: i64, col: i64) -> Result<usize> {
        self.checked_index(row, col).ok_or_else(|| {
            PercolationError::InvalidArgument(format!(
                "site ({row}, {col}) is outside the {n}x{n} grid",
                n = self.size
            ))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Flood fill from the top row over open sites.
    fn brute_force_full(open: &[bool], n: usize) -> Vec<bool> {
        let mut full = vec![false; n * n];
        let mut stack: Vec<usize> = (0..n).filter(|&c| open[c]).collect();
        while let Some(p) = stack.pop() {
            if full[p] {
                continue;
            }
            full[p] = true;
            let (r, c) = (p / n, p % n);
            let mut push = |q: usize| {
                if open[q] && !full[q] {
                    stack.push(q);
                }
            };
            if r > 0 {
                push(p - n);
            }
            if r + 1 < n {
                push(p + n);
            }
            if c > 0 {
                push(p - 1);
            }
            if c + 1 < n {
                push(p + 1);
            }
        }
        full
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn matches_flood_fill(
            n in 1_usize..8,
            sites in proptest::collection::vec((1_i64..8, 1_i64..8), 0..80),
        ) {
            let mut grid = PercolationGrid::new(n as i64).unwrap();
            let mut open = vec![false; n * n];
            let mut percolated = false;

            for &(row, col) in &sites {
                if row as usize > n || col as usize > n {
                    prop_assert!(grid.open(row, col).is_err());
                    continue;
                }
                grid.open(row, col).unwrap();
                open[(row as usize - 1) * n + (col as usize - 1)] = true;
                prop_assert!(grid.is_open(row, col).unwrap());

                let full = brute_force_full(&open, n);
                let now = (0..n).any(|c| full[(n - 1) * n + c]);
                prop_assert!(!percolated || grid.percolates(), "percolation reverted");
                percolated |= now;
                prop_assert_eq!(grid.percolates(), percolated);
            }

            let full = brute_force_full(&open, n);
            for row in 1..=n {
                for col in 1..=n {
                    let p = (row - 1) * n + (col - 1);
                    let is_full = grid.is_full(row as i64, col as i64).unwrap();
                    prop_assert_eq!(is_full, full[p]);
                    if is_full {
                        prop_assert!(grid.is_open(row as i64, col as i64).unwrap());
                    }
                }
            }
            prop_assert_eq!(
                grid.number_of_open_sites(),
                open.iter().filter(|&&o| o).count()
            );
        }
    }
}
