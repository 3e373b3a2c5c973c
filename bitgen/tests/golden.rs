//! Every family against its checked-in reference vectors: a seed line
//! and 1,000 raw words per set, two sets per family.

use bitgen::*;

fn read_vectors(name: &str) -> (u64, Vec<u64>) {
    let path = format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {path}: {err}"));
    let mut lines = text.lines();
    let seed = lines
        .next()
        .and_then(|line| line.split(',').nth(1))
        .and_then(|field| field.trim().parse().ok())
        .unwrap_or_else(|| panic!("malformed seed line in {name}"));
    let data = lines
        .map(|line| {
            line.rsplit(',')
                .next()
                .and_then(|field| field.trim().parse().ok())
                .unwrap_or_else(|| panic!("malformed row in {name}"))
        })
        .collect();
    (seed, data)
}

macro_rules! golden_family {
    ($test:ident, $stem:literal, $ctor:expr) => {
        #[test]
        fn $test() {
            for set in ["-testset-1.csv", "-testset-2.csv"] {
                let (seed, expect) = read_vectors(&format!("{}{}", $stem, set));
                let mut gen = $ctor(seed);
                assert_eq!(gen.random_raw(expect.len()), expect, "{}{}", $stem, set);
            }
        }
    };
}

golden_family!(mt19937_vectors, "mt19937", Mt19937::seeded);
golden_family!(mt64_vectors, "mt64", Mt64::seeded);
golden_family!(sfmt_vectors, "sfmt", Sfmt::seeded);
golden_family!(dsfmt_vectors, "dsfmt", Dsfmt::seeded);
golden_family!(xoroshiro128_vectors, "xoroshiro128", Xoroshiro128::seeded);
golden_family!(xoshiro256_vectors, "xoshiro256", Xoshiro256::seeded);
golden_family!(xoshiro512_vectors, "xoshiro512", Xoshiro512::seeded);
golden_family!(xorshift1024_vectors, "xorshift1024", Xorshift1024::seeded);
golden_family!(pcg32_vectors, "pcg32", Pcg32::seeded);
golden_family!(pcg64_vectors, "pcg64", Pcg64::seeded);
golden_family!(jsf64_vectors, "jsf64", Jsf64::seeded);
golden_family!(jsf32_vectors, "jsf32", Jsf32::seeded);
golden_family!(philox4x64_vectors, "philox4x64", Philox4x64::seeded);
golden_family!(philox4x32_vectors, "philox4x32", Philox4x32::seeded);
golden_family!(threefry4x64_vectors, "threefry4x64", ThreeFry4x64::seeded);
golden_family!(threefry4x32_vectors, "threefry4x32", ThreeFry4x32::seeded);
golden_family!(aesctr_vectors, "aesctr", AesCounter::seeded);
golden_family!(chacha_vectors, "chacha", ChaCha::seeded);
golden_family!(speck128_vectors, "speck128", Speck128::seeded);
golden_family!(hc128_vectors, "hc128", Hc128::seeded);

// the zero-seed set doubles as the single-word smoke check
#[test]
fn first_word_of_the_zero_seed_set() {
    let (seed, expect) = read_vectors("mt19937-testset-2.csv");
    assert_eq!(seed, 0);
    let mut gen = Mt19937::seeded(0);
    assert_eq!(gen.random_raw(1)[0], expect[0]);
}
