use glam::Vec3;

/// Fixed-angle orbit around the origin.
///
/// Pan and zoom are disabled and the polar angle is pinned, so the eye is a
/// pure function of radius, polar angle and azimuth. Polar is measured from
/// +Y, azimuth from +Z towards +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
}

impl OrbitRig {
    /// Spherical coordinates of an eye position.
    pub fn from_eye(eye: Vec3) -> Self {
        let radius = eye.length();
        let polar = if radius > 0.0 {
            (eye.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        Self {
            radius,
            polar,
            azimuth: eye.x.atan2(eye.z),
        }
    }

    /// Pin the polar angle, keeping radius and azimuth.
    pub fn with_polar(mut self, polar: f32) -> Self {
        self.polar = polar.clamp(0.0, std::f32::consts::PI);
        self
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        Vec3::new(
            self.radius * sin_p * sin_a,
            self.radius * cos_p,
            self.radius * sin_p * cos_a,
        )
    }
}
