//! Deterministic randomness: a stateless integer hash and a seeded xorshift32 stream

use std::f32::consts::TAU;

/// Avalanche-mix a 32-bit integer (lowbias32 finalizer).
pub fn hash_u32(seed: u32) -> u32 {
    let mut x = seed;
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}

/// Maps the top 24 bits of a u32 into [0, 1). Never returns 1.0.
fn unit_from_bits(bits: u32) -> f32 {
    (bits >> 8) as f32 / (1u32 << 24) as f32
}

/// Pure hash of `seed` into [0, 1). Same seed, same value.
pub fn hash01(seed: u32) -> f32 {
    unit_from_bits(hash_u32(seed))
}

/// Pure hash of `seed` into [min, max)
pub fn hash_range(seed: u32, min: f32, max: f32) -> f32 {
    min + hash01(seed) * (max - min)
}

/// Pure hash of `seed` into [-1, 1)
pub fn hash_signed(seed: u32) -> f32 {
    hash01(seed) * 2.0 - 1.0
}

/// Seeded xorshift32 stream. Used where a layout needs many draws per particle.
pub struct ParticleRng {
    state: u32,
}

impl ParticleRng {
    pub fn new(seed: u32) -> Self {
        // Pre-mix so neighbouring seeds start far apart; xorshift has no zero state.
        let mixed = hash_u32(seed);
        Self {
            state: if mixed == 0 { 1 } else { mixed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        unit_from_bits(self.next_u32())
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a float in [-1, 1)
    pub fn signed(&mut self) -> f32 {
        self.range(-1.0, 1.0)
    }

    /// Uniform direction on the unit sphere.
    ///
    /// Polar angle is drawn as `acos(2u - 1)` so points do not bunch at the poles.
    pub fn spherical_direction(&mut self) -> [f32; 3] {
        let azimuth = self.range(0.0, TAU);
        let polar = self.signed().clamp(-1.0, 1.0).acos();
        let sin_polar = polar.sin();
        [
            sin_polar * azimuth.cos(),
            polar.cos(),
            sin_polar * azimuth.sin(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash01_is_pure() {
        for seed in [0u32, 1, 42, 9999, u32::MAX] {
            assert_eq!(hash01(seed), hash01(seed));
        }
    }

    #[test]
    fn hash01_bounds() {
        for seed in 0..10_000u32 {
            let v = hash01(seed);
            assert!((0.0..1.0).contains(&v), "seed {seed} gave {v}");
        }
    }

    #[test]
    fn hash01_mean_is_centered() {
        let n = 20_000u32;
        let mean: f32 = (0..n).map(hash01).sum::<f32>() / n as f32;
        assert!((mean - 0.5).abs() < 0.02);
    }

    #[test]
    fn hash_avalanches_adjacent_seeds() {
        let flipped: u32 = (0..1000u32)
            .map(|i| (hash_u32(i) ^ hash_u32(i + 1)).count_ones())
            .sum();
        let mean = flipped as f32 / 1000.0;
        assert!(mean > 12.0 && mean < 20.0, "mean flipped bits {mean}");
    }

    #[test]
    fn hash_range_stays_in_bounds() {
        for seed in 0..1000u32 {
            let v = hash_range(seed, 6.0, 11.0);
            assert!((6.0..11.0).contains(&v), "seed {seed} gave {v}");
            assert_eq!(v, 6.0 + hash01(seed) * 5.0);
        }
    }

    #[test]
    fn rng_range_bounds() {
        let mut rng = ParticleRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!(v >= 0.0 && v < 10.0);
        }
    }

    #[test]
    fn rng_same_seed_same_stream() {
        let mut a = ParticleRng::new(7);
        let mut b = ParticleRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn rng_zero_seed_is_usable() {
        let mut rng = ParticleRng::new(0);
        let first = rng.next_f32();
        let second = rng.next_f32();
        assert_ne!(first, second);
    }

    #[test]
    fn spherical_direction_unit_length() {
        let mut rng = ParticleRng::new(123);
        for _ in 0..100 {
            let d = rng.spherical_direction();
            let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
            assert!((len - 1.0).abs() < 0.001);
        }
    }
}
