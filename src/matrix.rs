use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use serde::Serialize;

use crate::amount::Amount;

/// A dense row-major `rows x cols` grid, used both for unit costs and for allocations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // row * cols + col
}

impl<T: Clone + Default> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    /// Build a matrix from its rows. Returns `None` for ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let n_rows = rows.len();
        Some(Self {
            rows: n_rows,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().skip(j).step_by(self.cols.max(1))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// All cells in row-major order along with their `(row, col)` position.
    pub fn indexed(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(k, v)| ((k / cols, k % cols), v))
    }
}

impl<T: Amount> Matrix<T> {
    pub fn row_sums(&self) -> Vec<T> {
        self.iter_rows().map(|r| r.iter().copied().sum()).collect()
    }

    pub fn column_sums(&self) -> Vec<T> {
        (0..self.cols)
            .map(|j| self.column(j).copied().sum())
            .collect()
    }

    pub fn total(&self) -> T {
        self.data.iter().copied().sum()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }

    #[test]
    fn sums_follow_rows_and_columns() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row_sums(), vec![6, 15]);
        assert_eq!(m.column_sums(), vec![5, 7, 9]);
        assert_eq!(m.total(), 21);
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.column(1).copied().collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn indexed_walks_row_major() {
        let m = Matrix::from_rows(vec![vec![7, 8], vec![9, 10]]).unwrap();
        let cells: Vec<_> = m.indexed().map(|(pos, v)| (pos, *v)).collect();
        assert_eq!(
            cells,
            vec![((0, 0), 7), ((0, 1), 8), ((1, 0), 9), ((1, 1), 10)]
        );
    }
}
