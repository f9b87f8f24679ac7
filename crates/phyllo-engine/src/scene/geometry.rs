use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-unique identifier of a [`Geometry`].
///
/// Renderers key their GPU-side buffers by this id; positions are immutable once
/// wrapped, so an id uploaded once never needs re-uploading.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GeometryId(u64);

impl GeometryId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Immutable point buffer: flat `[x0, y0, z0, x1, y1, z1, ...]`.
///
/// Cloning is cheap (shared buffer, same id).
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    id: GeometryId,
    positions: Arc<[f32]>,
}

impl Geometry {
    /// Wraps a flat position buffer. Trailing floats that do not form a whole
    /// point are dropped.
    pub fn from_positions(mut positions: Vec<f32>) -> Self {
        let whole = positions.len() - positions.len() % 3;
        positions.truncate(whole);
        Self {
            id: GeometryId::next(),
            positions: positions.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> GeometryId {
        self.id
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Geometry::from_positions(vec![0.0; 3]);
        let b = Geometry::from_positions(vec![0.0; 3]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn partial_point_is_dropped() {
        let g = Geometry::from_positions(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(g.point_count(), 1);
        assert_eq!(g.point(0), Some([1.0, 2.0, 3.0]));
        assert_eq!(g.point(1), None);
    }
}
