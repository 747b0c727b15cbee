//! Tolerances for the degeneracy checks.

/// Geometry configuration (tolerances).
///
/// - `eps_len`: two points closer than this are treated as coincident.
/// - `eps_det`: relative threshold on `|AB × AC| / (|AB|·|AC|)` below which
///   three points are treated as collinear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_len: f64,
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-12,
            eps_det: 1e-12,
        }
    }
}
