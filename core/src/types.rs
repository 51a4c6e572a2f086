use ndarray::Array2;

/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`, also used for `(rows, columns)` sizes.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major linear index of `coords` in a grid of `size`.
pub const fn linear_index(coords: Coord2, size: Coord2) -> CellCount {
    coords.0 as CellCount * size.1 as CellCount + coords.1 as CellCount
}

/// Inverse of [`linear_index`].
pub const fn from_linear_index(index: CellCount, size: Coord2) -> Coord2 {
    let columns = size.1 as CellCount;
    ((index / columns) as Coord, (index % columns) as Coord)
}

pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Valid neighbors of `center` in a grid of `size`, excluding `center` itself.
pub fn neighbors(center: Coord2, size: Coord2) -> NeighborIter {
    NeighborIter::new(center, size)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, columns) = self.dim();
        let size = (
            rows.try_into().unwrap_or(Coord::MAX),
            columns.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, column) = coords;
    let (d_row, d_column) = delta;
    let (rows, columns) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_column = column.checked_add_signed(d_column.try_into().ok()?)?;
    if next_column >= columns {
        return None;
    }

    Some((next_row, next_column))
}

#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len() - usize::from(self.index)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    use super::*;

    fn expected_count(coords: Coord2, size: Coord2) -> usize {
        let edge = |value: Coord, len: Coord| -> usize {
            if len == 1 {
                1
            } else if value == 0 || value == len - 1 {
                2
            } else {
                3
            }
        };
        edge(coords.0, size.0) * edge(coords.1, size.1) - 1
    }

    #[test]
    fn corners_edges_and_interior_have_expected_counts() {
        let size = (4, 5);
        assert_eq!(neighbors((0, 0), size).count(), 3);
        assert_eq!(neighbors((3, 4), size).count(), 3);
        assert_eq!(neighbors((0, 2), size).count(), 5);
        assert_eq!(neighbors((2, 0), size).count(), 5);
        assert_eq!(neighbors((1, 1), size).count(), 8);
    }

    #[test]
    fn neighbors_are_in_bounds_unique_and_exclude_center() {
        for size in [(1, 1), (1, 4), (3, 1), (3, 3), (6, 9)] {
            for row in 0..size.0 {
                for column in 0..size.1 {
                    let center = (row, column);
                    let found: Vec<_> = neighbors(center, size).collect();
                    let unique: BTreeSet<_> = found.iter().copied().collect();

                    assert_eq!(found.len(), unique.len(), "duplicates around {center:?}");
                    assert!(!unique.contains(&center));
                    assert!(found.iter().all(|&pos| in_bounds(pos, size)));
                    assert!(found.iter().all(|&(r, c)| r.abs_diff(row) <= 1 && c.abs_diff(column) <= 1));
                    assert_eq!(found.len(), expected_count(center, size));
                }
            }
        }
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn array_neighbors_use_array_shape() {
        let grid: Array2<u8> = Array2::zeros([2, 3]);
        let found: Vec<_> = grid.iter_neighbors((0, 2)).collect();
        assert_eq!(found, [(0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn linear_index_round_trips_row_major() {
        let size = (30, 16);
        assert_eq!(linear_index((0, 0), size), 0);
        assert_eq!(linear_index((1, 0), size), 16);
        assert_eq!(linear_index((29, 15), size), 479);
        assert_eq!(from_linear_index(17, size), (1, 1));
    }
}
