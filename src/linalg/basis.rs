use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::linalg::elimination::invert;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::narration::trace::StepTrace;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct BasisMatrix<T> {
    /// The matrix `A` with `A·b_i = T(b_i)` for every basis vector.
    pub matrix: MatrixGen<T>,
    pub trace: StepTrace,
}

fn check_common_length<T>(vectors: &[Vec<T>], name: &str) -> Result<usize> {
    let len = vectors.first().map(|v| v.len()).unwrap_or(0);
    if len == 0 {
        return Err(Error::Dimension(format!("{} vectors have no components", name)));
    }
    if let Some(i) = vectors.iter().position(|v| v.len() != len) {
        return Err(Error::Dimension(format!(
            "{} vector {} has {} components, expected {}",
            name,
            i + 1,
            vectors[i].len(),
            len
        )));
    }
    Ok(len)
}

/// Recovers the matrix of a linear map from the images of a basis:
/// `A = C·B⁻¹` where `B` holds the basis and `C` the images as columns.
#[instrument(level = "debug", skip_all, fields(count = basis.len()))]
pub fn matrix_from_basis_images<T: GenElement>(
    basis: &[Vec<T>],
    images: &[Vec<T>],
    config: &KernelConfig,
) -> Result<BasisMatrix<T>> {
    if basis.is_empty() {
        return Err(Error::Shape("no basis vectors were given".into()));
    }
    if basis.len() != images.len() {
        return Err(Error::Shape(format!(
            "{} basis vectors but {} images",
            basis.len(),
            images.len()
        )));
    }
    let n = check_common_length(basis, "basis")?;
    check_common_length(images, "image")?;
    if n != basis.len() {
        return Err(Error::Shape(format!(
            "a basis of a space of dimension {} needs {} vectors, got {}",
            n,
            n,
            basis.len()
        )));
    }

    let narrator = config.narrator();
    let b = MatrixGen::from_columns(basis.to_vec())?;
    let c = MatrixGen::from_columns(images.to_vec())?;

    let mut trace = StepTrace::new();
    trace.heading("Basis vectors as the columns of B");
    trace.block(narrator.matrix(&b, None));
    trace.heading("Images as the columns of C");
    trace.block(narrator.matrix(&c, None));

    trace.heading("Inverting B by reducing [B | I]");
    let (b_inv, reduction) = invert(&b, config).map_err(|e| match e {
        Error::Singular(_) => Error::Singular("the basis vectors are linearly dependent".into()),
        other => other,
    })?;
    trace.append(reduction.trace);
    trace.note("B⁻¹ =");
    trace.block(narrator.matrix(&b_inv, None));

    let matrix = (&c * &b_inv)?;
    debug!(rows = matrix.rows, cols = matrix.cols, "matrix recovered");
    trace.heading("A = C·B⁻¹");
    trace.block(narrator.matrix(&matrix, None));

    Ok(BasisMatrix { matrix, trace })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
