//! Floating hearts background
//!
//! A batch of [`ParticleDescriptor`]s is drawn once when the page mounts and
//! kept for the lifetime of that mount. Each descriptor drives one heart that
//! loops upward forever through the `heart-float` keyframes rendered by
//! [`crate::components::floating_hearts::FloatingHearts`].

use std::ops::Range;
use std::rc::Rc;

use rand::Rng;
use serde::Serialize;

use crate::config::HEART_COUNT;

const HORIZONTAL_RANGE: Range<f64> = 0.0..100.0;
const VERTICAL_RANGE: Range<f64> = 0.0..100.0;
const SCALE_RANGE: Range<f64> = 0.5..1.5;
const DURATION_RANGE: Range<f64> = 10.0..30.0;
const DELAY_RANGE: Range<f64> = 0.0..5.0;

/// Parameters for one independently looping heart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleDescriptor {
    pub id: usize,
    /// Percent of viewport width
    pub horizontal_offset: f64,
    /// Percent of viewport height. Only a seed, the animation always starts
    /// below the bottom edge.
    pub vertical_offset: f64,
    pub scale: f64,
    pub duration_seconds: f64,
    pub delay_seconds: f64,
}

impl ParticleDescriptor {
    fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            horizontal_offset: rng.random_range(HORIZONTAL_RANGE),
            vertical_offset: rng.random_range(VERTICAL_RANGE),
            scale: rng.random_range(SCALE_RANGE),
            duration_seconds: rng.random_range(DURATION_RANGE),
            delay_seconds: rng.random_range(DELAY_RANGE),
        }
    }

    /// Inline style for the heart element.
    pub fn inline_style(&self) -> String {
        format!(
            "left: {:.2}vw; --heart-scale: {:.3}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.horizontal_offset, self.scale, self.duration_seconds, self.delay_seconds
        )
    }
}

/// Draws [`HEART_COUNT`] descriptors, `id` equal to generation order.
pub fn generate_batch<R: Rng + ?Sized>(rng: &mut R) -> Vec<ParticleDescriptor> {
    (0..HEART_COUNT)
        .map(|id| ParticleDescriptor::random(id, rng))
        .collect()
}

/// A generated batch shared between renders of one mount.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartField {
    hearts: Rc<[ParticleDescriptor]>,
}

impl HeartField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hearts: generate_batch(rng).into(),
        }
    }

    /// The batch. Cloning the handle never regenerates it.
    pub fn hearts(&self) -> Rc<[ParticleDescriptor]> {
        Rc::clone(&self.hearts)
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    fn in_range(value: f64, range: Range<f64>) -> bool {
        value >= range.start && value < range.end
    }

    #[test]
    fn test_batch_has_twenty_hearts_in_order() {
        let mut rng = Pcg32::seed_from_u64(7);
        let batch = generate_batch(&mut rng);
        assert_eq!(batch.len(), 20);
        for (index, heart) in batch.iter().enumerate() {
            assert_eq!(heart.id, index);
        }
    }

    #[test]
    fn test_batch_ids_distinct() {
        let mut rng = Pcg32::seed_from_u64(42);
        let ids: HashSet<usize> = generate_batch(&mut rng).iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), HEART_COUNT);
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = generate_batch(&mut Pcg32::seed_from_u64(99999));
        let b = generate_batch(&mut Pcg32::seed_from_u64(99999));
        assert_eq!(a, b);
    }

    #[test]
    fn test_field_reads_are_memoized() {
        let field = HeartField::generate(&mut Pcg32::seed_from_u64(3));
        let first = field.hearts();
        let second = field.hearts();
        assert!(Rc::ptr_eq(&first, &second));

        // Cloning the field (as a re-render does) shares the same batch
        let copy = field.clone();
        assert!(Rc::ptr_eq(&first, &copy.hearts()));
        assert_eq!(field.len(), HEART_COUNT);
    }

    #[test]
    fn test_inline_style() {
        let heart = ParticleDescriptor {
            id: 0,
            horizontal_offset: 12.5,
            vertical_offset: 80.0,
            scale: 0.75,
            duration_seconds: 14.25,
            delay_seconds: 2.0,
        };
        assert_eq!(
            heart.inline_style(),
            "left: 12.50vw; --heart-scale: 0.750; animation-duration: 14.25s; animation-delay: 2.00s;"
        );
    }

    proptest! {
        #[test]
        fn prop_every_field_in_range(seed in any::<u64>()) {
            let batch = generate_batch(&mut Pcg32::seed_from_u64(seed));
            prop_assert_eq!(batch.len(), HEART_COUNT);
            for heart in &batch {
                prop_assert!(in_range(heart.horizontal_offset, HORIZONTAL_RANGE));
                prop_assert!(in_range(heart.vertical_offset, VERTICAL_RANGE));
                prop_assert!(in_range(heart.scale, SCALE_RANGE));
                prop_assert!(in_range(heart.duration_seconds, DURATION_RANGE));
                prop_assert!(in_range(heart.delay_seconds, DELAY_RANGE));
            }
        }
    }
}
