use crate::Point3;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box of a sampled point batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(*first, *first), |acc, &p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec3(1.0, 2.0, 3.0), dvec3(-1.0, 5.0, 0.0), dvec3(3.0, -1.0, 2.0)];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
    }

    #[test]
    fn test_single_point_is_degenerate_box() {
        let p = dvec3(4.0, -2.0, 0.5);
        let aabb = Aabb3::from_points(&[p]).unwrap();
        assert_eq!(aabb, Aabb3::new(p, p));
    }

    #[test]
    fn test_from_no_points() {
        assert!(Aabb3::from_points(&[]).is_none());
    }
}
