use super::{Point3, Vec3};

/// A half-line `origin + t * direction` for `t >= 0`.
///
/// Distances reported by intersection routines are only true lengths when
/// `direction` has unit length; rays built by the camera always do.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}
