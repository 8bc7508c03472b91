use nalgebra::{Rotation3, Vector3};

use crate::math::{Point3, Ray, Vec3};

/// Pinhole camera mapping normalized image coordinates to world-space rays.
///
/// With `yaw == pitch == 0` the camera looks down +Z, with +X to the right
/// of the image and +Y towards increasing `v`.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub origin: Point3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    orientation: Rotation3<f32>,
    half_height: f32,
}

impl Camera {
    /// `fov` is the full vertical field of view in radians and must lie in `(0, pi)`.
    pub fn new(origin: Point3, yaw: f32, pitch: f32, fov: f32) -> Camera {
        debug_assert!(
            fov > 0.0 && fov < std::f32::consts::PI,
            "fov out of range: {}",
            fov
        );
        // yaw turns around +Y, then pitch tilts around the turned +X
        let orientation = Rotation3::from_axis_angle(&Vector3::y_axis(), yaw)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), pitch);
        Camera {
            origin,
            yaw,
            pitch,
            fov,
            orientation,
            half_height: (fov / 2.0).tan(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3(self.orientation * Vec3::Z.0)
    }

    /// `u` and `v` range over `[-1, 1]` with `(0, 0)` at the image center.
    pub fn trace_ray(&self, u: f32, v: f32) -> Ray {
        let local = Vector3::new(u * self.half_height, v * self.half_height, 1.0);
        let direction = Vec3(self.orientation * local).normalized();
        Ray::new(self.origin, direction)
    }
}
