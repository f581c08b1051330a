//! Fixed-capacity ring history of recently closed curves.
//!
//! The ring owns its slots exclusively for the lifetime of one detection
//! pass; once it wraps, the oldest curve is overwritten. All indexing is
//! modulo the capacity, and backward offsets wrap to `capacity + offset`.

use crate::detect::curve::Curve;

/// Circular buffer of [`Curve`]s. Slots start out blank.
#[derive(Debug, Clone)]
pub struct CurveRing<'a> {
    slots: Vec<Curve<'a>>,
}

impl<'a> CurveRing<'a> {
    /// Create a ring with `capacity` blank slots.
    ///
    /// Panics if `capacity` is zero. To hold a full cycle plus its
    /// repetition the capacity must be at least twice the maximum waveform
    /// length; [`crate::config::DetectorConfig::validate`] enforces that.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be at least 1");
        CurveRing {
            slots: vec![Curve::blank(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Curve at `index`, taken modulo capacity.
    pub fn get(&self, index: usize) -> &Curve<'a> {
        &self.slots[index % self.slots.len()]
    }

    /// Overwrite the slot at `index` (modulo capacity).
    pub fn set(&mut self, index: usize, curve: Curve<'a>) {
        let cap = self.slots.len();
        self.slots[index % cap] = curve;
    }

    /// Index `offset` slots behind `index`, wrapping through the ring.
    pub fn back(&self, index: usize, offset: usize) -> usize {
        let cap = self.slots.len();
        (index % cap + cap - offset % cap) % cap
    }

    /// Index one slot after `index`.
    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ring_is_blank() {
        let ring = CurveRing::new(8);
        assert_eq!(ring.capacity(), 8);
        for i in 0..8 {
            assert!(!ring.get(i).is_valid());
        }
    }

    #[test]
    fn test_set_get_wraps() {
        let seq = vec![1, 2, 3, 4];
        let mut ring = CurveRing::new(4);
        ring.set(6, Curve::new(&seq, 0, 4));
        assert!(ring.get(2).is_valid());
        assert!(ring.get(6).is_valid());
        assert!(!ring.get(3).is_valid());
    }

    #[test]
    fn test_back_wraps_negative_offsets() {
        let ring = CurveRing::new(10);
        assert_eq!(ring.back(5, 2), 3);
        assert_eq!(ring.back(0, 1), 9);
        assert_eq!(ring.back(2, 7), 5);
        assert_eq!(ring.back(3, 10), 3);
    }

    #[test]
    fn test_next_wraps() {
        let ring = CurveRing::new(3);
        assert_eq!(ring.next(0), 1);
        assert_eq!(ring.next(2), 0);
    }

    #[test]
    fn test_overwrite_oldest() {
        let seq_a = vec![10, 10];
        let seq_b = vec![-5, -5];
        let mut ring = CurveRing::new(2);
        ring.set(0, Curve::new(&seq_a, 0, 2));
        ring.set(1, Curve::new(&seq_a, 0, 2));
        // Third insert lands back on slot 0
        ring.set(2, Curve::new(&seq_b, 0, 2));
        assert_eq!(ring.get(0).samples(), &[-5, -5]);
        assert_eq!(ring.get(1).samples(), &[10, 10]);
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        CurveRing::new(0);
    }
}
