/// Park-Miller multiplier, 7^5
pub const MULTIPLIER: u64 = 16_807;
/// Mersenne prime 2^31 - 1
pub const MODULUS: u64 = 2_147_483_647;

/// One step of the Lehmer generator
pub fn lehmer_step(seed: u64) -> u64 {
    (seed % MODULUS) * MULTIPLIER % MODULUS
}

/// The sequence of states following `seed`, not including `seed` itself
pub fn lehmer_sequence(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(lehmer_step(seed)), |&state| Some(lehmer_step(state)))
}
