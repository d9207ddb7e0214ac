use crate::direction::Direction;
use crate::error::{EctError, Result};

/// The sweeping plane `n . x + d = 0` at its initial position.
///
/// `d` is chosen so the plane passes through the starting point. At sweep
/// step `t` the plane sits at `n . x + d = t`, and a point is included
/// once its [`offset`](Self::offset) is strictly below `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPlane {
    pub normal: Direction,
    pub d: f32,
}

impl SweepPlane {
    /// # Errors
    ///
    /// Returns [`EctError::NonFiniteStartingPoint`] if `starting_point` has a
    /// NaN or infinite coordinate, or if its projection overflows.
    pub fn through(normal: Direction, starting_point: [f32; 3]) -> Result<Self> {
        if !starting_point.iter().all(|v| v.is_finite()) {
            return Err(EctError::NonFiniteStartingPoint(starting_point));
        }
        let d = -normal.dot(&starting_point);
        if !d.is_finite() {
            return Err(EctError::NonFiniteStartingPoint(starting_point));
        }
        Ok(Self { normal, d })
    }

    /// Signed sweep coordinate of `p`: `n . p - n . start`.
    #[inline]
    pub fn offset(&self, p: &[f32; 3]) -> f32 {
        self.normal.dot(p) + self.d
    }
}

#[cfg(test)]
mod tests {
    use super::SweepPlane;
    use crate::{Direction, EctError};

    #[test]
    fn plane_passes_through_start() {
        let n = Direction::new([1.0, 2.0, -1.0]).unwrap();
        let start = [3.0, -1.0, 0.5];
        let plane = SweepPlane::through(n, start).unwrap();
        assert_eq!(plane.offset(&start), 0.0);
    }

    #[test]
    fn offset_is_relative_to_start() {
        let n = Direction::new([1.0, 0.0, 0.0]).unwrap();
        let plane = SweepPlane::through(n, [2.0, 7.0, 7.0]).unwrap();
        assert_eq!(plane.offset(&[5.0, 0.0, 0.0]), 3.0);
        assert_eq!(plane.offset(&[0.0, 0.0, 0.0]), -2.0);
    }

    #[test]
    fn non_unit_normal_scales_offsets() {
        let n = Direction::new([0.0, 0.0, 2.0]).unwrap();
        let plane = SweepPlane::through(n, [0.0, 0.0, 1.0]).unwrap();
        assert_eq!(plane.offset(&[4.0, 4.0, 1.5]), 1.0);
    }

    #[test]
    fn non_finite_start_is_rejected() {
        let n = Direction::new([1.0, 0.0, 0.0]).unwrap();
        let start = [f32::NAN, 0.0, 0.0];
        assert!(matches!(
            SweepPlane::through(n, start),
            Err(EctError::NonFiniteStartingPoint(_))
        ));
    }
}
