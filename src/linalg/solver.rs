use crate::config::KernelConfig;
use crate::error::Result;
use crate::linalg::elimination::{reduce, AugmentedSystem};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::narration::trace::StepTrace;
use itertools::Itertools;
use std::fmt;
use tracing::{debug, instrument};

/// How many solutions `A·x = b` has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Unique,
    /// Free variables exist; the solution family itself is not computed.
    Infinite,
    Inconsistent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Unique => write!(f, "Unique solution"),
            Classification::Infinite => write!(f, "Infinitely many solutions"),
            Classification::Inconsistent => write!(f, "No solution"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Solution<T> {
    pub classification: Classification,
    /// Set only for `Classification::Unique`.
    pub solution: Option<Vec<T>>,
    pub trace: StepTrace,
}

/// Reduces `[A | b]` and classifies the system. An inconsistent row wins
/// over rank considerations.
#[instrument(level = "debug", skip_all, fields(rows = a.rows, cols = a.cols))]
pub fn solve<T: GenElement>(
    a: &MatrixGen<T>,
    b: &[T],
    config: &KernelConfig,
) -> Result<Solution<T>> {
    let narrator = config.narrator();
    let system = AugmentedSystem::with_rhs(a, b)?;
    let n = a.cols;

    let mut trace = StepTrace::new();
    trace.heading("Augmented matrix [A | b]");
    let reduction = reduce(&system, config);
    trace.append(reduction.trace.clone());

    trace.heading("Classification");
    let state = &reduction.state;
    let inconsistent_row = (0..state.rows).find(|&r| {
        let row = state.row(r);
        row[..n].iter().all(|x| x.is_zero()) && !row[n].is_zero()
    });

    let (classification, solution) = if let Some(r) = inconsistent_row {
        trace.note(format!(
            "Row {} reads 0 = {}, which is impossible.",
            narrator.index(r),
            state.at(r, n)
        ));
        (Classification::Inconsistent, None)
    } else if reduction.rank() == n {
        let mut x = vec![T::zero(); n];
        for &(r, c) in &reduction.pivots {
            x[c] = state.at(r, n);
        }
        trace.note(format!("Every variable has a pivot ({} of {}).", reduction.rank(), n));
        for (i, value) in x.iter().enumerate() {
            trace.note(format!("x{} = {}", narrator.index(i), value));
        }
        (Classification::Unique, Some(x))
    } else {
        let free = reduction.free_columns(n);
        trace.note(format!(
            "Rank {} is less than the {} unknowns; free variable(s): {}.",
            reduction.rank(),
            n,
            free.iter()
                .map(|&c| format!("x{}", narrator.index(c)))
                .join(", ")
        ));
        (Classification::Infinite, None)
    };

    debug!(%classification, rank = reduction.rank(), "system classified");
    trace.heading("Result");
    trace.note(classification.to_string());

    Ok(Solution {
        classification,
        solution,
        trace,
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
