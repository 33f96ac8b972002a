//! Seed expansion for the sample generator
//!
//! A user seed is a single integer, but the generator needs 256 bits
//! (128-bit LCG state plus 128-bit stream selector). The seed is split into
//! 32-bit words, hashed into a 4-word entropy pool and drawn back out as
//! four 64-bit words, following the SeedSequence construction used by the
//! PCG64 reference generator. Seeds are therefore interchangeable with that
//! generator: seed 42 yields 0.7739560485559633 as its first uniform draw.

use rand::RngCore;
use rand_pcg::Pcg64;

use crate::PiError;

const POOL_SIZE: usize = 4;

const INIT_A: u32 = 0x43b0_d7e5;
const MULT_A: u32 = 0x931e_8875;
const INIT_B: u32 = 0x8b51_f9dd;
const MULT_B: u32 = 0x58f3_8ded;
const MIX_MULT_L: u32 = 0xca01_f9dd;
const MIX_MULT_R: u32 = 0x4973_f715;
const XSHIFT: u32 = 16;

/// Entropy pool derived from a list of 32-bit words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSequence {
    pool: [u32; POOL_SIZE],
}

impl SeedSequence {
    /// Mix arbitrary entropy words into a fresh pool.
    pub fn new(entropy: &[u32]) -> Self {
        let mut hash_const = INIT_A;
        let mut hashmix = |value: u32| -> u32 {
            let mut value = value ^ hash_const;
            hash_const = hash_const.wrapping_mul(MULT_A);
            value = value.wrapping_mul(hash_const);
            value ^ (value >> XSHIFT)
        };

        let mut pool = [0u32; POOL_SIZE];
        for (i, slot) in pool.iter_mut().enumerate() {
            *slot = hashmix(entropy.get(i).copied().unwrap_or(0));
        }

        for src in 0..POOL_SIZE {
            for dst in 0..POOL_SIZE {
                if src != dst {
                    let hashed = hashmix(pool[src]);
                    pool[dst] = mix(pool[dst], hashed);
                }
            }
        }

        for &word in entropy.iter().skip(POOL_SIZE) {
            for slot in pool.iter_mut() {
                let hashed = hashmix(word);
                *slot = mix(*slot, hashed);
            }
        }

        Self { pool }
    }

    /// Pool for an integer seed, split into little-endian 32-bit words.
    pub fn from_seed(seed: u64) -> Self {
        let lo = seed as u32;
        let hi = (seed >> 32) as u32;
        if hi == 0 {
            Self::new(&[lo])
        } else {
            Self::new(&[lo, hi])
        }
    }

    /// Pool fed with 128 bits of OS entropy.
    pub fn from_entropy() -> Self {
        let mut words = [0u32; 4];
        for word in words.iter_mut() {
            *word = rand::rngs::OsRng.next_u32();
        }
        Self::new(&words)
    }

    /// Draw `N` 64-bit words out of the pool.
    ///
    /// Each 64-bit word is assembled from two consecutive 32-bit outputs,
    /// low half first.
    pub fn generate_u64<const N: usize>(&self) -> [u64; N] {
        let mut hash_const = INIT_B;
        let mut words = self.pool.iter().copied().cycle();
        let mut next_word = || -> u32 {
            // cycle over a non-empty array never ends
            let mut value = words.next().unwrap_or_default() ^ hash_const;
            hash_const = hash_const.wrapping_mul(MULT_B);
            value = value.wrapping_mul(hash_const);
            value ^ (value >> XSHIFT)
        };

        let mut out = [0u64; N];
        for slot in out.iter_mut() {
            let lo = next_word() as u64;
            let hi = next_word() as u64;
            *slot = lo | (hi << 32);
        }
        out
    }

    /// Build the sample generator from this pool.
    pub fn pcg64(&self) -> Pcg64 {
        let [s0, s1, i0, i1] = self.generate_u64::<4>();
        let state = ((s0 as u128) << 64) | s1 as u128;
        let stream = ((i0 as u128) << 64) | i1 as u128;
        Pcg64::new(state, stream)
    }
}

fn mix(x: u32, y: u32) -> u32 {
    let result = MIX_MULT_L
        .wrapping_mul(x)
        .wrapping_sub(MIX_MULT_R.wrapping_mul(y));
    result ^ (result >> XSHIFT)
}

/// Generator for an optional seed; `None` draws fresh OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => SeedSequence::from_seed(seed).pcg64(),
        None => SeedSequence::from_entropy().pcg64(),
    }
}

/// Generator for a signed seed as stored by the estimator.
///
/// Any integer is a valid seed to hold, but only non-negative ones can be
/// expanded, so a negative seed fails here, at sampling time.
pub fn try_seeded_rng(seed: Option<i64>) -> Result<Pcg64, PiError> {
    let seed = seed
        .map(|seed| {
            u64::try_from(seed).map_err(|_| PiError::InvalidValue {
                field: "seed",
                reason: "must be non-negative to draw samples",
            })
        })
        .transpose()?;
    Ok(seeded_rng(seed))
}
