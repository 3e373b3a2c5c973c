//! Concrete end-to-end scenarios with literal inputs.

use bitgen::rand_core::RngCore;
use bitgen::*;

// stepping back by the golden-gamma jump distance equals wrapping
// forward past the 2^128 period
#[test]
fn pcg64_negative_and_wrapped_advance_agree() {
    let step: u128 = 0x9e37_79b9_7f4a_7c15 << 64;
    let seed = {
        let path = format!(
            "{}/tests/data/pcg64-testset-1.csv",
            env!("CARGO_MANIFEST_DIR")
        );
        let text = std::fs::read_to_string(path).expect("vector file");
        text.lines()
            .next()
            .and_then(|line| line.split(',').nth(1))
            .and_then(|field| field.trim().parse().ok())
            .expect("seed line")
    };

    let mut negative = Pcg64::seeded(seed);
    negative.advance(step.wrapping_neg());
    let mut wrapped = Pcg64::seeded(seed);
    wrapped.advance(u128::MAX - step + 1);
    assert_eq!(negative.next_u64(), wrapped.next_u64());
}

// one full 64-bit word of counter space, added directly
#[test]
fn philox_counter_only_advance_lands_on_the_second_word() {
    let mut gen = Philox::seeded(0);
    gen.advance(&[0, 1], true);
    assert_eq!(gen.state().state.counter, [0, 1, 0, 0]);
}

// the counter wraps at 2^128 blocks, so a whole output period is a no-op
#[test]
fn aesctr_whole_period_advance_is_identity() {
    let gen = AesCounter::seeded(0);
    let before = gen.state();
    let mut wrapped = gen.clone();
    wrapped.advance(&[0, 0, 2]);
    assert_eq!(wrapped.state(), before);
}

// the renamed scrambled-output generators answer to their old names
#[test]
#[allow(deprecated)]
fn renamed_generators_keep_their_old_constructors() {
    let mut old = Xoshiro256StarStar::seeded(0);
    let mut new = Xoshiro256::seeded(0);
    assert_eq!(old.random_raw(8), new.random_raw(8));
    let record = old.state();
    assert_eq!(record.bit_generator, "Xoshiro256");
}
