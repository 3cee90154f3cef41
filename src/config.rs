use crate::error::Result;
use crate::linalg::basis::{self, BasisMatrix};
use crate::linalg::determinant;
use crate::linalg::elimination::{self, AugmentedSystem, Reduction};
use crate::linalg::independence::{self, Independence, Method};
use crate::linalg::linearity::{self, LinearityCheck};
use crate::linalg::solver::{self, Solution};
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::narration::narrator::Narrator;
use crate::narration::trace::StepTrace;

/// Knobs shared by every kernel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    /// Largest square size whose determinant is expanded by cofactors.
    /// Bigger matrices go through elimination with sign tracking.
    pub cofactor_limit: usize,
    /// Follow every row operation with a snapshot of the matrix.
    pub record_snapshots: bool,
    /// Number rows and variables from 1 in the narration.
    pub one_based: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            cofactor_limit: 3,
            record_snapshots: true,
            one_based: true,
        }
    }
}

impl KernelConfig {
    pub fn narrator(&self) -> Narrator {
        Narrator::new(self.one_based)
    }
}

/// Entry point for callers that want a single handle on the kernel.
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    pub config: KernelConfig,
}

impl Kernel {
    pub fn new(config: KernelConfig) -> Self {
        Kernel { config }
    }

    pub fn reduce<T: GenElement>(&self, system: &AugmentedSystem<T>) -> Reduction<T> {
        elimination::reduce(system, &self.config)
    }

    pub fn determinant<T: GenElement>(&self, a: &MatrixGen<T>) -> Result<(T, StepTrace)> {
        determinant::determinant(a, &self.config)
    }

    pub fn is_independent<T: GenElement>(
        &self,
        vectors: &[Vec<T>],
        method: Method,
    ) -> Result<Independence> {
        independence::is_independent(vectors, method, &self.config)
    }

    pub fn solve<T: GenElement>(&self, a: &MatrixGen<T>, b: &[T]) -> Result<Solution<T>> {
        solver::solve(a, b, &self.config)
    }

    pub fn check_linearity<T: GenElement>(
        &self,
        a: &MatrixGen<T>,
        u: &[T],
        v: &[T],
        c: &T,
        d: &T,
    ) -> Result<LinearityCheck<T>> {
        linearity::check_linearity(a, u, v, c, d, &self.config)
    }

    pub fn matrix_from_basis_images<T: GenElement>(
        &self,
        basis: &[Vec<T>],
        images: &[Vec<T>],
    ) -> Result<BasisMatrix<T>> {
        basis::matrix_from_basis_images(basis, images, &self.config)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::solver::Classification;
    use crate::matrix::matrix::Matrix;
    use crate::rings::fraction::Fraction;

    fn m(lines: &[&[i64]]) -> MatrixGen<Fraction> {
        MatrixGen::from_list(
            lines
                .iter()
                .map(|l| l.iter().map(|&x| Fraction::from(x)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_cofactor_limit_selects_path() {
        let a = m(&[&[2, 1], &[1, 1]]);

        let (det, trace) = Kernel::default().determinant(&a).unwrap();
        assert_eq!(det, 1);
        assert_eq!(trace.lines()[0], "Determinant by cofactor expansion");

        let kernel = Kernel::new(KernelConfig {
            cofactor_limit: 0,
            ..KernelConfig::default()
        });
        let (det, trace) = kernel.determinant(&a).unwrap();
        assert_eq!(det, 1);
        assert_eq!(trace.lines()[0], "Determinant by row reduction");
    }

    #[test]
    fn test_zero_based_numbering() {
        let kernel = Kernel::new(KernelConfig {
            one_based: false,
            ..KernelConfig::default()
        });
        let b = vec![Fraction::from(1), Fraction::from(2)];
        let result = kernel.solve(&m(&[&[1, 1], &[1, 1]]), &b).unwrap();
        assert_eq!(result.classification, Classification::Inconsistent);
        assert!(result
            .trace
            .lines()
            .contains(&"Row 1 reads 0 = 1, which is impossible.".to_string()));
    }
}
