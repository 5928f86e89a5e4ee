use std::fmt;

use crate::cells::GridCoordinate;

#[derive(Debug, Copy, Clone)]
enum IterOrder {
    RowMajor,
    ColumnMajor,
}

/// Iterates every coordinate of a `width` x `height` grid.
///
/// Row major order walks `x` fastest; column major order walks `y` fastest, which is the
/// order the hunt phase scans in.
#[derive(Clone)]
pub struct CellIter {
    order: IterOrder,
    width: u32,
    height: u32,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn row_major(width: u32, height: u32) -> CellIter {
        CellIter::new(IterOrder::RowMajor, width, height)
    }

    pub(crate) fn column_major(width: u32, height: u32) -> CellIter {
        CellIter::new(IterOrder::ColumnMajor, width, height)
    }

    fn new(order: IterOrder, width: u32, height: u32) -> CellIter {
        CellIter {
            order,
            width,
            height,
            current_cell_number: 0,
            cells_count: width as usize * height as usize,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: order: {:?}, current_cell_number: {:?}, cells_count: {:?}",
               self.order,
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let n = self.current_cell_number;
            let coord = match self.order {
                IterOrder::RowMajor => {
                    let width = self.width as usize;
                    GridCoordinate::new((n % width) as u32, (n / width) as u32)
                }
                IterOrder::ColumnMajor => {
                    let height = self.height as usize;
                    GridCoordinate::new((n / height) as u32, (n % height) as u32)
                }
            };
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[derive(Debug, Copy, Clone)]
enum BatchIterType {
    Row,
    Column,
}

/// Iterates whole rows (top to bottom) or whole columns (left to right) of a grid.
#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    current_index: u32,
    width: u32,
    height: u32,
}

impl BatchIter {
    pub(crate) fn rows(width: u32, height: u32) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Row,
            current_index: 0,
            width,
            height,
        }
    }

    pub(crate) fn columns(width: u32, height: u32) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Column,
            current_index: 0,
            width,
            height,
        }
    }

    fn batches_count(&self) -> u32 {
        match self.iter_type {
            BatchIterType::Row => self.height,
            BatchIterType::Column => self.width,
        }
    }
}

impl ExactSizeIterator for BatchIter {} // default impl using size_hint()
impl Iterator for BatchIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.batches_count() {
            return None;
        }

        let index = self.current_index;
        let coords = match self.iter_type {
            BatchIterType::Row => {
                (0..self.width).map(|x| GridCoordinate::new(x, index)).collect()
            }
            BatchIterType::Column => {
                (0..self.height).map(|y| GridCoordinate::new(index, y)).collect()
            }
        };
        self.current_index += 1;
        Some(coords)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.batches_count() - self.current_index) as usize;
        (remaining, Some(remaining))
    }
}
