use bulletproofs::{BulletproofGens, PedersenGens};

/// Rewards are always range-proved at 64 bits.
pub const REWARD_RANGE_BITS: usize = 64;

/// Generator set shared by the range and linear proofs of a claim.
///
/// Prover and verifier must construct this from the same catalog size or
/// neither proof will check out.
#[derive(Clone)]
pub struct ProofGens {
    pub pedersen: PedersenGens,
    pub bulletproof: BulletproofGens,
}

/// Builds generators sized for the given incentive catalog.
///
/// The chain capacity is at least [`REWARD_RANGE_BITS`] so the range proof
/// has enough generators even for small catalogs.
pub fn setup(catalog_size: usize) -> ProofGens {
    let capacity = catalog_size.max(REWARD_RANGE_BITS);
    ProofGens {
        pedersen: PedersenGens::default(),
        bulletproof: BulletproofGens::new(capacity, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_covers_range_bits_for_small_catalogs() {
        let gens = setup(8);
        assert_eq!(gens.bulletproof.gens_capacity, REWARD_RANGE_BITS);
    }

    #[test]
    fn capacity_grows_with_catalog() {
        let gens = setup(256);
        assert_eq!(gens.bulletproof.gens_capacity, 256);
    }
}
