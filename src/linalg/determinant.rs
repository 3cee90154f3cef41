use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::linalg::elimination::{eliminate, Reduction};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::narration::trace::StepTrace;
use tracing::{debug, instrument};

fn ensure_square<T: GenElement>(a: &MatrixGen<T>) -> Result<()> {
    if !a.is_square() {
        return Err(Error::Dimension(format!(
            "determinant needs a square matrix, got {}x{}",
            a.rows, a.cols
        )));
    }
    Ok(())
}

/// Determinant of a square matrix with its derivation. Sizes up to
/// `config.cofactor_limit` are expanded by cofactors, larger ones reduced
/// with sign tracking.
#[instrument(level = "debug", skip_all, fields(n = a.rows))]
pub fn determinant<T: GenElement>(
    a: &MatrixGen<T>,
    config: &KernelConfig,
) -> Result<(T, StepTrace)> {
    ensure_square(a)?;
    if a.rows <= config.cofactor_limit {
        debug!("cofactor expansion");
        cofactor_with_trace(a, config)
    } else {
        debug!("elimination with sign tracking");
        let (det, reduction) = elimination_determinant(a, config)?;
        Ok((det, reduction.trace))
    }
}

/// Laplace expansion along the first row.
pub fn cofactor_determinant<T: GenElement>(a: &MatrixGen<T>) -> Result<T> {
    ensure_square(a)?;
    Ok(expand(a))
}

fn expand<T: GenElement>(a: &MatrixGen<T>) -> T {
    match a.rows {
        1 => a.at(0, 0),
        2 => a.at(0, 0) * a.at(1, 1) - a.at(0, 1) * a.at(1, 0),
        n => (0..n)
            .filter(|&j| !a.at(0, j).is_zero())
            .fold(T::zero(), |acc, j| {
                let term = a.at(0, j) * expand(&minor(a, 0, j));
                if j % 2 == 0 {
                    acc + term
                } else {
                    acc - term
                }
            }),
    }
}

/// `a` without row `row` and column `col`.
fn minor<T: GenElement>(a: &MatrixGen<T>, row: usize, col: usize) -> MatrixGen<T> {
    MatrixGen {
        rows: a.rows - 1,
        cols: a.cols - 1,
        cells: (0..a.rows)
            .filter(|&r| r != row)
            .flat_map(|r| {
                a.row(r)
                    .iter()
                    .enumerate()
                    .filter(move |&(c, _)| c != col)
                    .map(|(_, x)| x.clone())
            })
            .collect(),
    }
}

fn cofactor_with_trace<T: GenElement>(
    a: &MatrixGen<T>,
    config: &KernelConfig,
) -> Result<(T, StepTrace)> {
    let narrator = config.narrator();
    let mut trace = StepTrace::new();
    trace.heading("Determinant by cofactor expansion");
    trace.block(narrator.matrix(a, None));

    let det = expand(a);
    match a.rows {
        1 => trace.note(format!("det = {}", det)),
        2 => trace.note(format!(
            "det = {}·{} - {}·{} = {}",
            narrator.scalar(&a.at(0, 0)),
            narrator.scalar(&a.at(1, 1)),
            narrator.scalar(&a.at(0, 1)),
            narrator.scalar(&a.at(1, 0)),
            det
        )),
        n => {
            trace.note(format!("Expanding along row {}:", narrator.index(0)));
            let mut terms = Vec::with_capacity(n);
            for j in 0..n {
                let sub = minor(a, 0, j);
                let sub_det = expand(&sub);
                let sign = if j % 2 == 0 { "+" } else { "-" };
                trace.note(format!(
                    "{} {}·det(M{},{}) = {} {}·{}",
                    sign,
                    narrator.scalar(&a.at(0, j)),
                    narrator.index(0),
                    narrator.index(j),
                    sign,
                    narrator.scalar(&a.at(0, j)),
                    narrator.scalar(&sub_det)
                ));
                terms.push(format!("{} {}", sign, narrator.scalar(&(a.at(0, j) * sub_det))));
            }
            trace.note(format!("det = {} = {}", terms.join(" "), det));
        }
    }

    Ok((det, trace))
}

/// Determinant as `(-1)^swaps` times the product of the pivots, or zero
/// when some column has no pivot.
#[instrument(level = "debug", skip_all, fields(n = a.rows))]
pub fn elimination_determinant<T: GenElement>(
    a: &MatrixGen<T>,
    config: &KernelConfig,
) -> Result<(T, Reduction<T>)> {
    ensure_square(a)?;
    let narrator = config.narrator();
    let n = a.rows;

    let mut reduction = eliminate(a.clone(), n, None, config);
    let mut trace = StepTrace::new();
    trace.heading("Determinant by row reduction");
    trace.append(std::mem::take(&mut reduction.trace));

    let det = if reduction.rank() < n {
        let free = reduction.free_columns(n);
        trace.note(format!(
            "Column {} has no pivot, so det = 0",
            narrator.index(free[0])
        ));
        T::zero()
    } else {
        let sign_negative = reduction.swaps % 2 == 1;
        trace.note(format!(
            "{} row swap(s), sign = {}",
            reduction.swaps,
            if sign_negative { "-1" } else { "+1" }
        ));
        trace.note(format!("Product of pivots = {}", reduction.pivot_product));
        if sign_negative {
            T::zero() - reduction.pivot_product.clone()
        } else {
            reduction.pivot_product.clone()
        }
    };
    trace.note(format!("det = {}", det));
    debug!(%det, swaps = reduction.swaps, "determinant computed");

    reduction.trace = trace;
    Ok((det, reduction))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
