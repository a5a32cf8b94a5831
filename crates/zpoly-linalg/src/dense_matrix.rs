//! Dense matrices in row-major order.
//!
//! Just enough structure for block algorithms: construction, block
//! extraction and stacking, and sequential or parallel products.

use std::ops::{Index, IndexMut, Sub};

use rayon::prelude::*;

use zpoly_rings::traits::Ring;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R> DenseMatrix<R> {
    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "ragged rows");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [R] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Copies the `rows x cols` block whose top-left entry is `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the block does not fit inside the matrix.
    #[must_use]
    pub fn submatrix(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        assert!(row + rows <= self.num_rows && col + cols <= self.num_cols);
        let mut data = Vec::with_capacity(rows * cols);
        for i in row..row + rows {
            data.extend_from_slice(&self.row(i)[col..col + cols]);
        }
        Self {
            data,
            num_rows: rows,
            num_cols: cols,
        }
    }

    /// Stacks `top` above `bottom`.
    ///
    /// # Panics
    ///
    /// Panics if the column counts differ.
    #[must_use]
    pub fn vstack(top: Self, bottom: Self) -> Self {
        assert_eq!(top.num_cols, bottom.num_cols);
        let mut data = top.data;
        data.extend(bottom.data);
        Self {
            data,
            num_rows: top.num_rows + bottom.num_rows,
            num_cols: top.num_cols,
        }
    }

    /// Matrix-matrix multiply: C = A * B.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                result[(i, j)] = self.dot_col(i, other, j);
            }
        }
        result
    }

    /// Row `i` of `self` times column `j` of `other`.
    fn dot_col(&self, i: usize, other: &Self, j: usize) -> R {
        self.row(i)
            .iter()
            .enumerate()
            .fold(R::zero(), |acc, (k, a)| acc + a.clone() * other[(k, j)].clone())
    }
}

impl<R: Ring + Send + Sync> DenseMatrix<R> {
    /// Matrix-matrix multiply (parallel over rows): C = A * B.
    #[must_use]
    pub fn mm_parallel(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let data: Vec<R> = (0..self.num_rows)
            .into_par_iter()
            .flat_map_iter(|i| (0..other.num_cols).map(move |j| self.dot_col(i, other, j)))
            .collect();

        Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        }
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<R: Ring> Sub for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn sub(self, other: Self) -> DenseMatrix<R> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}
