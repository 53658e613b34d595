/// Scalar type for coordinates, lengths and material constants.
pub type Real = f64;

/// Absolute/relative tolerance pair for comparing derived quantities.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Within `tol.abs`, or within `tol.rel` of the larger magnitude.
/// NaN never compares equal.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}
