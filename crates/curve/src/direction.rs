use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{EctError, Result};

/// A validated sweep direction: finite and non-zero.
///
/// The vector is kept as given. It is not normalized, so for a non-unit
/// direction one sweep step advances the plane by `1 / |n|` in space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 3]", into = "[f32; 3]")]
pub struct Direction(Vector3<f32>);

impl Direction {
    /// # Errors
    ///
    /// Returns [`EctError::InvalidDirection`] for the zero vector or any
    /// non-finite component.
    pub fn new(v: [f32; 3]) -> Result<Self> {
        if !v.iter().all(|c| c.is_finite()) || v.iter().all(|&c| c == 0.0) {
            return Err(EctError::InvalidDirection(v));
        }
        Ok(Self(Vector3::new(v[0], v[1], v[2])))
    }

    /// Unit direction from spherical angles in radians: `azimuth` is measured
    /// in the xy plane from +x, `polar` from +z. `polar = π/2` stays in the
    /// xy plane.
    ///
    /// # Errors
    ///
    /// Returns [`EctError::InvalidDirection`] if either angle is non-finite.
    pub fn from_angles(azimuth: f32, polar: f32) -> Result<Self> {
        let (sa, ca) = azimuth.sin_cos();
        let (sp, cp) = polar.sin_cos();
        Self::new([sp * ca, sp * sa, cp])
    }

    /// Unit direction in the xy plane at `azimuth` radians from +x.
    ///
    /// # Errors
    ///
    /// Returns [`EctError::InvalidDirection`] if `azimuth` is non-finite.
    pub fn in_plane(azimuth: f32) -> Result<Self> {
        let (s, c) = azimuth.sin_cos();
        Self::new([c, s, 0.0])
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    pub fn norm(&self) -> f32 {
        self.0.norm()
    }

    pub fn normalized(&self) -> Self {
        Self(self.0.normalize())
    }

    pub fn negated(&self) -> Self {
        Self(-self.0)
    }

    #[inline]
    pub fn dot(&self, p: &[f32; 3]) -> f32 {
        self.0.x * p[0] + self.0.y * p[1] + self.0.z * p[2]
    }
}

impl TryFrom<[f32; 3]> for Direction {
    type Error = EctError;

    fn try_from(v: [f32; 3]) -> Result<Self> {
        Self::new(v)
    }
}

impl From<Direction> for [f32; 3] {
    fn from(d: Direction) -> Self {
        d.as_array()
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;
    use crate::EctError;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-6)
    }

    #[test]
    fn zero_vector_is_rejected() {
        assert_eq!(
            Direction::new([0.0, 0.0, 0.0]),
            Err(EctError::InvalidDirection([0.0, 0.0, 0.0]))
        );
        assert!(Direction::new([-0.0, 0.0, -0.0]).is_err());
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(Direction::new([f32::NAN, 1.0, 0.0]).is_err());
        assert!(Direction::new([0.0, f32::INFINITY, 0.0]).is_err());
    }

    #[test]
    fn non_unit_vector_is_kept() {
        let d = Direction::new([2.0, 0.0, 0.0]).unwrap();
        assert_eq!(d.as_array(), [2.0, 0.0, 0.0]);
        assert_eq!(d.norm(), 2.0);
        assert_eq!(d.normalized().as_array(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn angles_map_to_axes() {
        let x = Direction::from_angles(0.0, FRAC_PI_2).unwrap();
        assert!(close(x.as_array(), [1.0, 0.0, 0.0]));

        let y = Direction::in_plane(FRAC_PI_2).unwrap();
        assert!(close(y.as_array(), [0.0, 1.0, 0.0]));

        let z = Direction::from_angles(1.3, 0.0).unwrap();
        assert!(close(z.as_array(), [0.0, 0.0, 1.0]));

        let minus_x = Direction::in_plane(PI).unwrap();
        assert!(close(minus_x.as_array(), [-1.0, 0.0, 0.0]));
    }

    #[test]
    fn non_finite_angles_are_rejected() {
        assert!(matches!(
            Direction::from_angles(f32::NAN, 0.3),
            Err(EctError::InvalidDirection(_))
        ));
        assert!(matches!(
            Direction::from_angles(0.3, f32::INFINITY),
            Err(EctError::InvalidDirection(_))
        ));
        assert!(matches!(
            Direction::in_plane(f32::NEG_INFINITY),
            Err(EctError::InvalidDirection(_))
        ));
    }

    #[test]
    fn negated_flips_sign() {
        let d = Direction::new([1.0, -2.0, 3.0]).unwrap();
        assert_eq!(d.negated().as_array(), [-1.0, 2.0, -3.0]);
        assert_eq!(d.dot(&[1.0, 1.0, 1.0]), -d.negated().dot(&[1.0, 1.0, 1.0]));
    }

    #[test]
    fn serde_validates_on_load() {
        let d: Direction = serde_json::from_str("[0.0, 1.0, 0.0]").unwrap();
        assert_eq!(d.as_array(), [0.0, 1.0, 0.0]);
        assert_eq!(serde_json::to_string(&d).unwrap(), "[0.0,1.0,0.0]");

        assert!(serde_json::from_str::<Direction>("[0.0, 0.0, 0.0]").is_err());
    }
}
