use std::fmt;

use crate::cells::GridCoordinate;
use crate::units::{Height, Width};

/// Passage cells in row major order.
#[derive(Clone)]
pub struct PassageIter {
    width: usize,
    current_cell_number: usize,
    cells_count: usize,
}

impl PassageIter {
    pub fn new(width: Width, height: Height) -> PassageIter {
        PassageIter {
            width: width.0,
            current_cell_number: 0,
            cells_count: width.0 * height.0,
        }
    }
}

impl fmt::Debug for PassageIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PassageIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number, self.cells_count)
    }
}

impl ExactSizeIterator for PassageIter {} // default impl using size_hint()
impl Iterator for PassageIter {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let n = self.current_cell_number;
            self.current_cell_number += 1;
            Some(passage_at(n / self.width, n % self.width))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

/// Passage cells in a boustrophedon order: even logical rows west to east, odd rows east to west.
/// Consecutive items are always neighbours.
#[derive(Clone, Debug)]
pub struct SerpentineIter {
    inner: PassageIter,
}

impl SerpentineIter {
    pub fn new(width: Width, height: Height) -> SerpentineIter {
        SerpentineIter { inner: PassageIter::new(width, height) }
    }
}

impl ExactSizeIterator for SerpentineIter {}
impl Iterator for SerpentineIter {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.inner.width;
        self.inner.next().map(|c| {
            let (row, col) = (c.row / 2, c.col / 2);
            if row % 2 == 1 {
                passage_at(row, width - 1 - col)
            } else {
                c
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// One `Vec` of passage cells per logical row, top to bottom.
#[derive(Clone, Debug)]
pub struct LogicalRowsIter {
    width: usize,
    current_row: usize,
    rows_count: usize,
}

impl LogicalRowsIter {
    pub fn new(width: Width, height: Height) -> LogicalRowsIter {
        LogicalRowsIter {
            width: width.0,
            current_row: 0,
            rows_count: height.0,
        }
    }
}

impl ExactSizeIterator for LogicalRowsIter {}
impl Iterator for LogicalRowsIter {
    type Item = Vec<GridCoordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.rows_count {
            let row = self.current_row;
            self.current_row += 1;
            Some((0..self.width).map(|col| passage_at(row, col)).collect())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows_count - self.current_row;
        (remaining, Some(remaining))
    }
}

#[inline]
fn passage_at(row: usize, col: usize) -> GridCoordinate {
    GridCoordinate::new(row * 2 + 1, col * 2 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gc(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate::new(row, col)
    }

    #[test]
    fn passage_iter() {
        let cells = PassageIter::new(Width(2), Height(2)).collect::<Vec<_>>();
        assert_eq!(cells, &[gc(1, 1), gc(1, 3), gc(3, 1), gc(3, 3)]);
        assert_eq!(PassageIter::new(Width(3), Height(4)).len(), 12);
    }

    #[test]
    fn serpentine_iter() {
        let cells = SerpentineIter::new(Width(3), Height(2)).collect::<Vec<_>>();
        assert_eq!(cells, &[gc(1, 1), gc(1, 3), gc(1, 5), gc(3, 5), gc(3, 3), gc(3, 1)]);
    }

    #[test]
    fn serpentine_steps_are_neighbours() {
        let cells = SerpentineIter::new(Width(4), Height(5)).collect::<Vec<_>>();
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let distance = (a.row as isize - b.row as isize).abs() + (a.col as isize - b.col as isize).abs();
            assert_eq!(distance, 2);
        }
    }

    #[test]
    fn logical_rows_iter() {
        let rows = LogicalRowsIter::new(Width(2), Height(2)).collect::<Vec<_>>();
        assert_eq!(rows, vec![vec![gc(1, 1), gc(1, 3)], vec![gc(3, 1), gc(3, 3)]]);
    }
}
