use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::narration::trace::StepTrace;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct LinearityCheck<T> {
    /// `T(cu + dv) == cT(u) + dT(v)`, compared exactly.
    pub linear: bool,
    pub tu: Vec<T>,
    pub tv: Vec<T>,
    pub t_cu_dv: Vec<T>,
    pub c_tu_d_tv: Vec<T>,
    pub trace: StepTrace,
}

/// `c·x + d·y` component-wise.
fn combine<T: GenElement>(c: &T, x: &[T], d: &T, y: &[T]) -> Vec<T> {
    x.iter()
        .zip(y)
        .map(|(a, b)| c.clone() * a.clone() + d.clone() * b.clone())
        .collect()
}

/// Checks `T(cu + dv) = cT(u) + dT(v)` for `T(x) = A·x`.
#[instrument(level = "debug", skip_all, fields(rows = a.rows, cols = a.cols))]
pub fn check_linearity<T: GenElement>(
    a: &MatrixGen<T>,
    u: &[T],
    v: &[T],
    c: &T,
    d: &T,
    config: &KernelConfig,
) -> Result<LinearityCheck<T>> {
    if u.len() != v.len() {
        return Err(Error::Dimension(format!(
            "u has {} components but v has {}",
            u.len(),
            v.len()
        )));
    }
    let narrator = config.narrator();
    let mut trace = StepTrace::new();
    trace.heading("Transformation T(x) = A·x");
    trace.block(narrator.matrix(a, None));
    trace.note(format!("u = {}", narrator.tuple(u)));
    trace.note(format!("v = {}", narrator.tuple(v)));
    trace.note(format!("c = {}, d = {}", c, d));

    let cu_dv = combine(c, u, d, v);
    trace.heading("Step 1: cu + dv");
    trace.block(narrator.labelled_column("cu + dv", &cu_dv));

    let tu = a.mul_vec(u)?;
    let tv = a.mul_vec(v)?;
    trace.heading("Step 2: T(u) and T(v)");
    trace.block(narrator.labelled_column("T(u)", &tu));
    trace.block(narrator.labelled_column("T(v)", &tv));

    let t_cu_dv = a.mul_vec(&cu_dv)?;
    trace.heading("Step 3: T(cu + dv)");
    trace.block(narrator.labelled_column("T(cu + dv)", &t_cu_dv));

    let c_tu_d_tv = combine(c, &tu, d, &tv);
    trace.heading("Step 4: cT(u) + dT(v)");
    trace.block(narrator.labelled_column("cT(u) + dT(v)", &c_tu_d_tv));

    let linear = t_cu_dv == c_tu_d_tv;
    debug!(linear, "linearity compared");
    trace.heading("Comparison");
    trace.note(format!(
        "T(cu + dv) = {} {} cT(u) + dT(v) = {}",
        narrator.tuple(&t_cu_dv),
        if linear { "=" } else { "≠" },
        narrator.tuple(&c_tu_d_tv)
    ));
    trace.note(if linear {
        "The identity holds for these inputs."
    } else {
        "The identity does not hold for these inputs."
    });

    Ok(LinearityCheck {
        linear,
        tu,
        tv,
        t_cu_dv,
        c_tu_d_tv,
        trace,
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
