use crate::{Aabb, CloudView};

/// An ordered point path stored as struct-of-arrays.
///
/// Sequence order is meaningful: point `i` is joined to point `i + 1` by an
/// implicit edge, so a cloud of `n` points describes an open polyline with
/// `n - 1` edges (a protein backbone or its alpha-carbon trace).
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
        }
    }

    pub fn from_xyz(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>) -> Self {
        assert_eq!(x.len(), y.len(), "x and y must have same length");
        assert_eq!(x.len(), z.len(), "x and z must have same length");

        Self { x, y, z }
    }

    pub fn from_points(points: &[[f32; 3]]) -> Self {
        let mut x = Vec::with_capacity(points.len());
        let mut y = Vec::with_capacity(points.len());
        let mut z = Vec::with_capacity(points.len());

        for p in points {
            x.push(p[0]);
            y.push(p[1]);
            z.push(p[2]);
        }

        Self { x, y, z }
    }

    pub fn from_array(data: &[f32], num_points: usize) -> Self {
        assert_eq!(
            data.len(),
            num_points * 3,
            "interleaved xyz input must have num_points * 3 floats"
        );

        let mut x = Vec::with_capacity(num_points);
        let mut y = Vec::with_capacity(num_points);
        let mut z = Vec::with_capacity(num_points);

        for chunk in data.chunks_exact(3).take(num_points) {
            x.push(chunk[0]);
            y.push(chunk[1]);
            z.push(chunk[2]);
        }

        Self::from_xyz(x, y, z)
    }

    pub fn view_from_array(data: &[f32], num_points: usize) -> CloudView<'_> {
        CloudView::from_interleaved_xyz(data, num_points)
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.x.len(), self.y.len());
        debug_assert_eq!(self.x.len(), self.z.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_xyz(&self.x, &self.y, &self.z)
    }

    pub fn point(&self, i: usize) -> [f32; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    pub fn iter_points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| [*x, *y, *z])
    }

    /// The implicit path edges `(i, i + 1)` in sequence order.
    ///
    /// A cloud with fewer than two points has no edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> {
        (1..self.len()).map(|j| (j - 1, j))
    }

    /// Arithmetic mean of the finite points, or `None` if there are none.
    pub fn centroid(&self) -> Option<[f32; 3]> {
        let mut sum = [0.0f64; 3];
        let mut count = 0usize;
        for p in self.iter_points() {
            if !p.iter().all(|v| v.is_finite()) {
                continue;
            }
            for axis in 0..3 {
                sum[axis] += p[axis] as f64;
            }
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let n = count as f64;
        Some([
            (sum[0] / n) as f32,
            (sum[1] / n) as f32,
            (sum[2] / n) as f32,
        ])
    }

    pub fn to_array(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * 3);
        for i in 0..self.len() {
            out.push(self.x[i]);
            out.push(self.y[i]);
            out.push(self.z[i]);
        }
        out
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new()
    }
}
