use crate::{Aabb, CloudView, PointCloud};

/// Read access to an ordered point path.
///
/// Consecutive indices are joined by an implicit edge. The sweep engine is
/// generic over this trait so owned clouds, borrowed interleaved buffers and
/// plain point slices can all be swept without conversion.
pub trait PointPath {
    fn len(&self) -> usize;

    fn point(&self, i: usize) -> [f32; 3];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_points((0..self.len()).map(|i| self.point(i)))
    }
}

impl PointPath for PointCloud {
    fn len(&self) -> usize {
        PointCloud::len(self)
    }

    fn point(&self, i: usize) -> [f32; 3] {
        PointCloud::point(self, i)
    }

    fn bounds(&self) -> Aabb {
        self.aabb()
    }
}

impl PointPath for CloudView<'_> {
    fn len(&self) -> usize {
        CloudView::len(self)
    }

    fn point(&self, i: usize) -> [f32; 3] {
        CloudView::point(self, i)
    }
}

impl PointPath for [[f32; 3]] {
    fn len(&self) -> usize {
        <[[f32; 3]]>::len(self)
    }

    fn point(&self, i: usize) -> [f32; 3] {
        self[i]
    }
}
