//! Gauss-Jordan elimination shared by every engine of the kernel.
//!
//! Pivots are chosen by scanning downward for the first non-zero entry of
//! the column. All arithmetic is exact, so no magnitude-based pivoting is
//! needed.

use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::narration::trace::{RowOperation, StepTrace};
use tracing::{debug, instrument, trace};

/// Coefficient matrix with its right-hand side appended as the last column.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSystem<T> {
    pub matrix: MatrixGen<T>,
}

impl<T: GenElement> AugmentedSystem<T> {
    /// `[a | b]`
    pub fn with_rhs(a: &MatrixGen<T>, b: &[T]) -> Result<Self> {
        if b.len() != a.rows {
            return Err(Error::Dimension(format!(
                "right-hand side has {} entries but the matrix has {} rows",
                b.len(),
                a.rows
            )));
        }
        let rhs = MatrixGen {
            rows: a.rows,
            cols: 1,
            cells: b.to_vec(),
        };
        Ok(AugmentedSystem {
            matrix: a.append_columns(&rhs)?,
        })
    }

    /// `[a | 0]`
    pub fn homogeneous(a: &MatrixGen<T>) -> Self {
        let mut cells = Vec::with_capacity(a.rows * (a.cols + 1));
        for r in 0..a.rows {
            cells.extend(a.row(r).iter().cloned());
            cells.push(T::zero());
        }
        AugmentedSystem {
            matrix: MatrixGen {
                rows: a.rows,
                cols: a.cols + 1,
                cells,
            },
        }
    }

    pub fn coefficient_cols(&self) -> usize {
        self.matrix.cols - 1
    }

    pub fn coefficients(&self) -> MatrixGen<T> {
        self.matrix.columns(0, self.coefficient_cols())
    }

    pub fn rhs(&self) -> Vec<T> {
        self.matrix.column(self.coefficient_cols())
    }
}

/// Outcome of one elimination run.
#[derive(Debug, Clone)]
pub struct Reduction<T> {
    /// Reduced row-echelon form of the input.
    pub state: MatrixGen<T>,
    /// `(row, column)` of every pivot, columns strictly increasing.
    pub pivots: Vec<(usize, usize)>,
    /// Every row operation applied, in order.
    pub operations: Vec<RowOperation<T>>,
    /// Number of row swaps performed.
    pub swaps: usize,
    /// Product of the pivot values before they were scaled to 1.
    pub pivot_product: T,
    pub trace: StepTrace,
}

impl<T: GenElement> Reduction<T> {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn is_pivot_column(&self, col: usize) -> bool {
        self.pivots.iter().any(|&(_, c)| c == col)
    }

    /// Columns among the first `cols` that received no pivot.
    pub fn free_columns(&self, cols: usize) -> Vec<usize> {
        (0..cols).filter(|&c| !self.is_pivot_column(c)).collect()
    }
}

/// Reduces `[A | b]` to reduced row-echelon form. Pivots are only searched
/// in the coefficient columns; the augmented column is carried along.
#[instrument(level = "debug", skip_all, fields(rows = system.matrix.rows, cols = system.matrix.cols))]
pub fn reduce<T: GenElement>(system: &AugmentedSystem<T>, config: &KernelConfig) -> Reduction<T> {
    let split = system.coefficient_cols();
    eliminate(system.matrix.clone(), split, Some(split), config)
}

/// Gauss-Jordan over the first `pivot_cols` columns of `mat`. Remaining
/// columns are transformed along with the rows but never pivoted on.
/// `split` only affects how snapshots are drawn.
pub(crate) fn eliminate<T: GenElement>(
    mut mat: MatrixGen<T>,
    pivot_cols: usize,
    split: Option<usize>,
    config: &KernelConfig,
) -> Reduction<T> {
    let narrator = config.narrator();
    let mut trace = StepTrace::new();
    let mut operations = Vec::new();
    let mut pivots = Vec::new();
    let mut swaps = 0;
    let mut pivot_product = T::one();

    trace.block(narrator.matrix(&mat, split));

    let mut record = |mat: &MatrixGen<T>, operation: RowOperation<T>, trace: &mut StepTrace| {
        trace.operation(narrator.operation(&operation));
        if config.record_snapshots {
            trace.block(narrator.matrix(mat, split));
        }
        operations.push(operation);
    };

    let mut row = 0;
    for col in 0..pivot_cols {
        if row >= mat.rows {
            break;
        }

        let pivot_row = match (row..mat.rows).find(|&r| !mat.at(r, col).is_zero()) {
            Some(r) => r,
            None => {
                trace!(col, "no pivot in column");
                continue;
            }
        };
        debug!(row, col, pivot_row, "pivot found");

        if pivot_row != row {
            mat.swap_rows(row, pivot_row);
            swaps += 1;
            record(
                &mat,
                RowOperation::Swap {
                    first: row,
                    second: pivot_row,
                },
                &mut trace,
            );
        }

        let pivot = mat.at(row, col);
        pivot_product = pivot_product * pivot.clone();
        if !pivot.is_one() {
            mat.scale_row(row, &(T::one() / pivot.clone()));
            record(&mat, RowOperation::Scale { row, pivot }, &mut trace);
        }

        for r in 0..mat.rows {
            if r == row {
                continue;
            }
            let factor = mat.at(r, col);
            if factor.is_zero() {
                continue;
            }
            mat.combine_rows(r, row, &factor);
            record(
                &mat,
                RowOperation::Combine {
                    target: r,
                    source: row,
                    factor,
                },
                &mut trace,
            );
        }

        pivots.push((row, col));
        row += 1;
    }

    if operations.is_empty() {
        trace.note("Already in reduced row-echelon form; no row operations needed.");
    }

    Reduction {
        state: mat,
        pivots,
        operations,
        swaps,
        pivot_product,
        trace,
    }
}

/// Inverts a square matrix by reducing `[A | I]`.
#[instrument(level = "debug", skip_all, fields(rows = a.rows, cols = a.cols))]
pub fn invert<T: GenElement>(
    a: &MatrixGen<T>,
    config: &KernelConfig,
) -> Result<(MatrixGen<T>, Reduction<T>)> {
    if !a.is_square() {
        return Err(Error::Shape(format!(
            "only square matrices can be inverted, got {}x{}",
            a.rows, a.cols
        )));
    }

    let n = a.rows;
    let augmented = a.append_columns(&MatrixGen::identity(n))?;
    let reduction = eliminate(augmented, n, Some(n), config);
    if reduction.rank() < n {
        debug!(rank = reduction.rank(), "matrix is not invertible");
        return Err(Error::Singular(format!(
            "rank {} is less than its size {}",
            reduction.rank(),
            n
        )));
    }

    Ok((reduction.state.columns(n, 2 * n), reduction))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
