//! Axis-aligned bounds over face positions.

use crate::{DVec3, Face};

/// Axis-aligned bounding box. `None` from [`Bounds3::from_faces`] means no points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds3 {
    #[inline]
    pub fn from_point(p: DVec3) -> Self {
        Self { min: p, max: p }
    }

    /// Grow to include `p`.
    #[inline]
    pub fn extend(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Bounds of every corner position of `faces`.
    pub fn from_faces<'a>(faces: impl IntoIterator<Item = &'a Face>) -> Option<Self> {
        let mut points = faces.into_iter().flat_map(|f| f.positions());
        let mut bounds = Self::from_point(points.next()?);
        for p in points {
            bounds.extend(p);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FaceVertex, dvec3};

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(Bounds3::from_faces(&[] as &[Face]), None);
    }

    #[test]
    fn bounds_cover_all_corners() {
        let at = |x, y, z| FaceVertex {
            position: dvec3(x, y, z),
            ..Default::default()
        };
        let faces = [
            Face::new([at(0.0, 0.0, 0.0), at(1.0, 0.0, 0.0), at(0.0, 1.0, 0.0)]),
            Face::new([at(-2.0, 0.5, 3.0), at(0.0, 0.0, 0.0), at(0.0, 4.0, -1.0)]),
        ];
        let b = Bounds3::from_faces(&faces).expect("bounds");
        assert_eq!(b.min, dvec3(-2.0, 0.0, -1.0));
        assert_eq!(b.max, dvec3(1.0, 4.0, 3.0));
        assert_eq!(b.size(), dvec3(3.0, 4.0, 4.0));
        assert_eq!(b.center(), dvec3(-0.5, 2.0, 1.0));
    }
}
