use surfgrid_core::{Result, SurfError};
use surfgrid_geometry::Surface;
use surfgrid_math::Point3;

/// Evaluate `surface` at paired parameters.
///
/// Failures from the surface are returned as-is; there is no retry and no
/// partial output.
pub fn sample(surface: &dyn Surface, us: &[f64], vs: &[f64]) -> Result<Vec<Point3>> {
    if us.len() != vs.len() {
        return Err(SurfError::LengthMismatch {
            u_len: us.len(),
            v_len: vs.len(),
        });
    }
    if us.is_empty() {
        return Ok(Vec::new());
    }

    let points = surface.evaluate_array(us, vs)?;
    if points.len() != us.len() {
        return Err(SurfError::Evaluation(format!(
            "surface returned {} points for {} parameter pairs",
            points.len(),
            us.len()
        )));
    }
    Ok(points)
}
