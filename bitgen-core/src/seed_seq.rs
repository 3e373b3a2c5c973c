use alloc::vec::Vec;

use rand_core::{OsRng, RngCore};

use crate::Error;

const DEFAULT_POOL_SIZE: usize = 4;
const INIT_A: u32 = 0x43b0_d7e5;
const MULT_A: u32 = 0x931e_8875;
const INIT_B: u32 = 0x8b51_f9dd;
const MULT_B: u32 = 0x58f3_8ded;
const MIX_MULT_L: u32 = 0xca01_f9dd;
const MIX_MULT_R: u32 = 0x4973_f715;
const XSHIFT: u32 = 16;

/// Mixes arbitrary entropy into a reproducible stream of 32-bit words.
///
/// The pool is filled by a DJBX33A-style multiply/xor-shift hash over the
/// concatenation of the entropy words and the spawn key, then every output
/// word is drawn by re-hashing the pool.  Identical
/// `(entropy, spawn_key, pool_size)` always produce identical output;
/// [`spawn`] derives children whose spawn keys extend the parent's path, so
/// sibling streams never collide.
///
/// [`spawn`]: SeedSequence::spawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedSequence {
    entropy: Vec<u32>,
    spawn_key: Vec<u32>,
    pool: Vec<u32>,
    n_children_spawned: u32,
}

impl SeedSequence {
    /// Seed from a single non-negative integer, decomposed little-endian
    /// into 32-bit words (zero contributes one zero word).
    pub fn new(entropy: u128) -> Self {
        Self::from_entropy_words(&int_to_words(entropy))
    }

    /// Seed from explicit 32-bit entropy words.
    pub fn from_entropy_words(entropy: &[u32]) -> Self {
        Self::build(entropy, &[], DEFAULT_POOL_SIZE)
    }

    /// Seed from operating-system entropy.
    pub fn from_os_entropy() -> Self {
        let mut words = [0u32; DEFAULT_POOL_SIZE];
        for w in words.iter_mut() {
            *w = OsRng.next_u32();
        }
        Self::from_entropy_words(&words)
    }

    /// Full constructor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidValue`] when `pool_size` is below 4 words.
    pub fn with_spawn_key(
        entropy: &[u32],
        spawn_key: &[u32],
        pool_size: usize,
    ) -> Result<Self, Error> {
        if pool_size < DEFAULT_POOL_SIZE {
            return Err(Error::InvalidValue("pool_size must be at least 4"));
        }
        Ok(Self::build(entropy, spawn_key, pool_size))
    }

    fn build(entropy: &[u32], spawn_key: &[u32], pool_size: usize) -> Self {
        let mut ss = Self {
            entropy: entropy.to_vec(),
            spawn_key: spawn_key.to_vec(),
            pool: alloc::vec![0; pool_size],
            n_children_spawned: 0,
        };
        let mut assembled = ss.entropy.clone();
        assembled.extend_from_slice(&ss.spawn_key);
        ss.mix_entropy(&assembled);
        ss
    }

    fn mix_entropy(&mut self, entropy: &[u32]) {
        let mut hash_const = INIT_A;
        let pool_size = self.pool.len();
        for i in 0..pool_size {
            let v = entropy.get(i).copied().unwrap_or(0);
            self.pool[i] = hashmix(v, &mut hash_const);
        }
        for i_src in 0..pool_size {
            for i_dst in 0..pool_size {
                if i_src != i_dst {
                    let h = hashmix(self.pool[i_src], &mut hash_const);
                    self.pool[i_dst] = mix(self.pool[i_dst], h);
                }
            }
        }
        for &word in entropy.iter().skip(pool_size) {
            for i_dst in 0..pool_size {
                let h = hashmix(word, &mut hash_const);
                self.pool[i_dst] = mix(self.pool[i_dst], h);
            }
        }
    }

    /// Fill `out` with 32-bit state words.
    pub fn fill_u32(&self, out: &mut [u32]) {
        let mut hash_const = INIT_B;
        for (i, slot) in out.iter_mut().enumerate() {
            let mut data = self.pool[i % self.pool.len()];
            data ^= hash_const;
            hash_const = hash_const.wrapping_mul(MULT_B);
            data = data.wrapping_mul(hash_const);
            data ^= data >> XSHIFT;
            *slot = data;
        }
    }

    /// Fill `out` with 64-bit state words (adjacent 32-bit words paired
    /// low-then-high).
    pub fn fill_u64(&self, out: &mut [u64]) {
        let mut words = alloc::vec![0u32; 2 * out.len()];
        self.fill_u32(&mut words);
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = u64::from(words[2 * i]) | (u64::from(words[2 * i + 1]) << 32);
        }
    }

    /// `n` 32-bit state words.
    pub fn generate_u32(&self, n: usize) -> Vec<u32> {
        let mut out = alloc::vec![0u32; n];
        self.fill_u32(&mut out);
        out
    }

    /// `n` 64-bit state words.
    pub fn generate_u64(&self, n: usize) -> Vec<u64> {
        let mut out = alloc::vec![0u64; n];
        self.fill_u64(&mut out);
        out
    }

    /// Derive `n` child sequences with spawn keys extending this one's.
    pub fn spawn(&mut self, n: u32) -> Vec<SeedSequence> {
        let mut kids = Vec::with_capacity(n as usize);
        for k in self.n_children_spawned..self.n_children_spawned + n {
            let mut key = self.spawn_key.clone();
            key.push(k);
            kids.push(Self::build(&self.entropy, &key, self.pool.len()));
        }
        self.n_children_spawned += n;
        kids
    }

    /// The canonicalized entropy words.
    pub fn entropy(&self) -> &[u32] {
        &self.entropy
    }

    /// The spawn-key path of this sequence.
    pub fn spawn_key(&self) -> &[u32] {
        &self.spawn_key
    }

    /// Pool length in 32-bit words.
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// How many children have been spawned so far.
    pub fn n_children_spawned(&self) -> u32 {
        self.n_children_spawned
    }
}

fn int_to_words(mut n: u128) -> Vec<u32> {
    if n == 0 {
        return alloc::vec![0];
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(n as u32);
        n >>= 32;
    }
    out
}

fn hashmix(value: u32, hash_const: &mut u32) -> u32 {
    let mut value = value ^ *hash_const;
    *hash_const = hash_const.wrapping_mul(MULT_A);
    value = value.wrapping_mul(*hash_const);
    value ^ (value >> XSHIFT)
}

fn mix(x: u32, y: u32) -> u32 {
    let r = x
        .wrapping_mul(MIX_MULT_L)
        .wrapping_sub(y.wrapping_mul(MIX_MULT_R));
    r ^ (r >> XSHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purity() {
        let a = SeedSequence::new(42);
        let b = SeedSequence::new(42);
        assert_eq!(a.generate_u32(16), b.generate_u32(16));
        assert_eq!(a.generate_u64(16), b.generate_u64(16));
    }

    #[test]
    fn prefix_stability() {
        let ss = SeedSequence::new(7);
        let long = ss.generate_u32(64);
        assert_eq!(ss.generate_u32(8)[..], long[..8]);
    }

    #[test]
    fn u64_pairs_low_then_high() {
        let ss = SeedSequence::new(123);
        let w32 = ss.generate_u32(4);
        let w64 = ss.generate_u64(2);
        assert_eq!(w64[0], u64::from(w32[0]) | (u64::from(w32[1]) << 32));
        assert_eq!(w64[1], u64::from(w32[2]) | (u64::from(w32[3]) << 32));
    }

    #[test]
    fn entropy_decomposition() {
        let wide = SeedSequence::new(0x1_0000_0002);
        let words = SeedSequence::from_entropy_words(&[2, 1]);
        assert_eq!(wide.generate_u32(8), words.generate_u32(8));
        assert_eq!(SeedSequence::new(0).entropy(), &[0]);
    }

    #[test]
    fn spawn_paths_are_distinct() {
        let mut parent = SeedSequence::new(9);
        let kids = parent.spawn(2);
        assert_eq!(parent.n_children_spawned(), 2);
        assert_eq!(kids[0].spawn_key(), &[0]);
        assert_eq!(kids[1].spawn_key(), &[1]);
        assert_ne!(kids[0].generate_u32(4), kids[1].generate_u32(4));
        assert_ne!(kids[0].generate_u32(4), parent.generate_u32(4));
        // spawn again: the counter keeps the paths fresh
        let more = parent.spawn(1);
        assert_eq!(more[0].spawn_key(), &[2]);
    }

    #[test]
    fn small_pool_rejected() {
        assert!(matches!(
            SeedSequence::with_spawn_key(&[1], &[], 2),
            Err(Error::InvalidValue(_))
        ));
    }
}
