use surfgrid_geometry::Surface;
use surfgrid_math::Point3;

/// Bring raw planar-function output into world space.
///
/// Columns are permuted by the surface's input orientation first. If the
/// surface carries a placement, its translation is subtracted from every point
/// and the 3x3 block is then applied point by point.
pub fn transform(surface: &dyn Surface, points: &mut [Point3]) {
    let orientation = surface.input_orientation();
    for p in points.iter_mut() {
        *p = orientation.permute(*p);
    }

    if let Some(placement) = surface.placement() {
        placement.subtract_translation(points);
        placement.apply_linear(points);
    }
}
