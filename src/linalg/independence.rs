use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::linalg::determinant::determinant;
use crate::linalg::elimination::{reduce, AugmentedSystem};
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::narration::trace::StepTrace;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Reduce the homogeneous system `[v1 .. vn | 0]`.
    Elimination,
    /// Check `det [v1 .. vn] != 0`; square case only.
    Determinant,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elimination" => Ok(Method::Elimination),
            "determinant" => Ok(Method::Determinant),
            _ => Err(Error::parse(s, "expected 'elimination' or 'determinant'")),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Elimination => write!(f, "elimination"),
            Method::Determinant => write!(f, "determinant"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Independence {
    pub independent: bool,
    pub trace: StepTrace,
}

/// Decides whether the given column vectors are linearly independent.
#[instrument(level = "debug", skip(vectors, config), fields(count = vectors.len()))]
pub fn is_independent<T: GenElement>(
    vectors: &[Vec<T>],
    method: Method,
    config: &KernelConfig,
) -> Result<Independence> {
    if vectors.is_empty() {
        return Err(Error::Shape("no vectors were given".into()));
    }
    let dim = vectors[0].len();
    if dim == 0 {
        return Err(Error::Dimension("vectors have no components".into()));
    }
    if let Some(i) = vectors.iter().position(|v| v.len() != dim) {
        return Err(Error::Dimension(format!(
            "vector {} has {} components, expected {}",
            i + 1,
            vectors[i].len(),
            dim
        )));
    }
    if method == Method::Determinant && vectors.len() != dim {
        return Err(Error::Shape(format!(
            "the determinant method needs as many vectors as components, got {} vectors of size {}",
            vectors.len(),
            dim
        )));
    }

    let narrator = config.narrator();
    let a = MatrixGen::from_columns(vectors.to_vec())?;
    let mut trace = StepTrace::new();
    trace.heading("Vectors as the columns of A");
    for (i, v) in vectors.iter().enumerate() {
        trace.note(format!("v{} = {}", narrator.index(i), narrator.tuple(v)));
    }
    trace.block(narrator.matrix(&a, None));

    let independent = match method {
        Method::Elimination => {
            trace.heading("Solving A·c = 0");
            let reduction = reduce(&AugmentedSystem::homogeneous(&a), config);
            trace.append(reduction.trace.clone());

            let free = reduction.free_columns(a.cols);
            if free.is_empty() {
                trace.note(format!(
                    "Every column has a pivot ({} of {}), so only c = 0 solves the system.",
                    reduction.rank(),
                    a.cols
                ));
                true
            } else {
                trace.note(format!(
                    "Free variable(s): {}. The system has non-trivial solutions.",
                    free.iter()
                        .map(|&c| format!("c{}", narrator.index(c)))
                        .join(", ")
                ));
                false
            }
        }
        Method::Determinant => {
            let (det, det_trace) = determinant(&a, config)?;
            trace.append(det_trace);
            let independent = !det.is_zero();
            trace.note(if independent {
                format!("det A = {} ≠ 0", det)
            } else {
                "det A = 0".to_string()
            });
            independent
        }
    };

    debug!(independent, %method, "independence decided");
    trace.heading("Result");
    trace.note(if independent {
        "The vectors are linearly independent."
    } else {
        "The vectors are linearly dependent."
    });

    Ok(Independence { independent, trace })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn v(values: &[i64]) -> Vec<Fraction> {
        values.iter().map(|&x| Fraction::from(x)).collect()
    }

    #[test]
    fn test_identity_columns_are_independent() {
        let config = KernelConfig::default();
        let vectors = vec![v(&[1, 0]), v(&[0, 1])];
        for method in [Method::Elimination, Method::Determinant] {
            let result = is_independent(&vectors, method, &config).unwrap();
            assert!(result.independent);
            assert_eq!(
                result.trace.lines().last().unwrap(),
                "The vectors are linearly independent."
            );
        }
    }

    #[test]
    fn test_multiples_are_dependent() {
        let config = KernelConfig::default();
        let vectors = vec![v(&[1, 2]), v(&[2, 4])];

        let result = is_independent(&vectors, Method::Elimination, &config).unwrap();
        assert!(!result.independent);
        assert!(result
            .trace
            .lines()
            .contains(&"Free variable(s): c2. The system has non-trivial solutions.".to_string()));

        let result = is_independent(&vectors, Method::Determinant, &config).unwrap();
        assert!(!result.independent);
        assert!(result.trace.lines().contains(&"det A = 0".to_string()));
    }

    #[test]
    fn test_more_vectors_than_dimension() {
        let vectors = vec![v(&[1, 0]), v(&[0, 1]), v(&[1, 1])];
        let config = KernelConfig::default();
        assert!(!is_independent(&vectors, Method::Elimination, &config)
            .unwrap()
            .independent);
        assert!(matches!(
            is_independent(&vectors, Method::Determinant, &config),
            Err(Error::Shape(_))
        ));
    }

    #[test]
    fn test_fewer_vectors_than_dimension() {
        let vectors = vec![v(&[1, 0, 2]), v(&[0, 1, 3])];
        let result = is_independent(&vectors, Method::Elimination, &KernelConfig::default());
        assert!(result.unwrap().independent);
    }

    #[test]
    fn test_bad_input() {
        let config = KernelConfig::default();
        assert!(matches!(
            is_independent::<Fraction>(&[], Method::Elimination, &config),
            Err(Error::Shape(_))
        ));
        assert!(matches!(
            is_independent(&[v(&[1, 2]), v(&[1])], Method::Elimination, &config),
            Err(Error::Dimension(_))
        ));
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("elimination".parse::<Method>().unwrap(), Method::Elimination);
        assert_eq!(" Determinant ".parse::<Method>().unwrap(), Method::Determinant);
        assert!(matches!("gauss".parse::<Method>(), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_methods_agree_on_square_sets() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = KernelConfig::default();

        for _ in 0..200 {
            let n = rng.gen_range(1..=5);
            let vectors: Vec<Vec<Fraction>> = (0..n)
                .map(|_| (0..n).map(|_| Fraction::from(rng.gen_range(-1i64..=1))).collect())
                .collect();
            let by_elimination = is_independent(&vectors, Method::Elimination, &config).unwrap();
            let by_determinant = is_independent(&vectors, Method::Determinant, &config).unwrap();
            assert_eq!(
                by_elimination.independent, by_determinant.independent,
                "{:?}",
                vectors
            );
        }
    }
}
