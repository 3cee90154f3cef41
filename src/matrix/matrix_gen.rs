use num_traits::{One, Zero};

use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::linalg::elimination;
use crate::matrix::matrix::Matrix;
use std::ops;
use std::ops::{Add, Div, Mul, Sub};

pub trait GenElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::cmp::Ord
    + std::fmt::Debug
{
}

impl<T> GenElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::cmp::Ord
        + std::fmt::Debug
{
}

/// Dense row-major matrix. Elimination code assumes `T` behaves as a field
/// (exact division by any non-zero element).
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let rows = lines.len();
        if rows == 0 {
            return Err(Error::Dimension("matrix has no rows".into()));
        }

        let cols = lines[0].len();
        if cols == 0 {
            return Err(Error::Dimension("matrix has no columns".into()));
        }
        if let Some(line) = lines.iter().position(|l| l.len() != cols) {
            return Err(Error::Dimension(format!(
                "row {} has {} entries, expected {}",
                line + 1,
                lines[line].len(),
                cols
            )));
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            let row = self.row(i);
            let pivot_col_opt = row.iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    for r in i + 1..self.rows {
                        if self.row(r).iter().any(|x| !x.is_zero()) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if !row[pivot_col].is_one() {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != i && !self.at(r, pivot_col).is_zero() {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Inverse without narration; use `elimination::invert` for the steps.
    fn inverse(&self) -> Result<MatrixGen<T>> {
        let config = KernelConfig {
            record_snapshots: false,
            ..KernelConfig::default()
        };
        elimination::invert(self, &config).map(|(inverse, _)| inverse)
    }

    fn identity(n: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

impl<T: GenElement> MatrixGen<T> {
    /// Builds a matrix whose columns are the given vectors, in order.
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<MatrixGen<T>> {
        Ok(<MatrixGen<T> as Matrix<T>>::from_list(columns)?.transpose())
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn column(&self, col: usize) -> Vec<T> {
        (0..self.rows).map(|r| self.at(r, col)).collect()
    }

    /// Copy of the columns `start..end`.
    pub fn columns(&self, start: usize, end: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: self.rows,
            cols: end - start,
            cells: (0..self.rows)
                .flat_map(|r| self.row(r)[start..end].iter().cloned())
                .collect(),
        }
    }

    /// `[self | rhs]`
    pub fn append_columns(&self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.rows != rhs.rows {
            return Err(Error::Dimension(format!(
                "cannot append a matrix with {} rows to one with {} rows",
                rhs.rows, self.rows
            )));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols + rhs.cols,
            cells: (0..self.rows)
                .flat_map(|r| self.row(r).iter().chain(rhs.row(r)).cloned())
                .collect(),
        })
    }

    /// `result[i] = sum_j self[i][j] * x[j]`
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.cols {
            return Err(Error::Dimension(format!(
                "vector of length {} cannot be multiplied by a matrix with {} columns",
                x.len(),
                self.cols
            )));
        }

        Ok((0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(x)
                    .map(|(a, b)| a.clone() * b.clone())
                    .sum()
            })
            .collect())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// `row <- factor * row`
    pub fn scale_row(&mut self, row: usize, factor: &T) {
        for cell in &mut self.cells[row * self.cols..(row + 1) * self.cols] {
            *cell = cell.clone() * factor.clone();
        }
    }

    /// `target <- target - factor * source`
    pub fn combine_rows(&mut self, target: usize, source: usize, factor: &T) {
        for k in 0..self.cols {
            let b = self.at(source, k) * factor.clone();
            let cell = &mut self.cells[target * self.cols + k];
            *cell = cell.clone() - b;
        }
    }
}

impl<T: GenElement> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn add(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(Error::Dimension(format!(
                "cannot add a {}x{} matrix to a {}x{} matrix",
                rhs.rows, rhs.cols, self.rows, self.cols
            )));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.to_owned() + b.to_owned())
                .collect(),
        })
    }
}

impl<T: GenElement> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.rows {
            return Err(Error::Dimension(format!(
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
