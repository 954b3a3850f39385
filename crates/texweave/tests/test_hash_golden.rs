//! Pinned values of the coordinate hash.
//!
//! These must not change between releases: every seeded texture in the
//! crate is derived from them.

use pretty_assertions::assert_eq;
use texweave::hash::{hash, hash_unit, unit16};

const GOLDEN: [((i64, i64, u64), u64); 7] = [
    ((0, 0, 0), 0x0000_0000_0000_0000),
    ((1, 0, 0), 0x1e5f_1ecd_aae5_1b68),
    ((0, 1, 0), 0x1228_5d04_6100_397e),
    ((-1, -1, 42), 0xa839_3b42_f995_ec5a),
    ((10, 20, 1), 0xd460_0d46_1471_bd67),
    ((123_456, -654_321, 0xDEAD_BEEF), 0x758c_d36e_3d2e_967a),
    ((-7, 3, u64::MAX), 0x4858_86be_cf5c_b25b),
];

#[test]
fn test_hash_table() {
    let actual: Vec<_> = GOLDEN
        .iter()
        .map(|&((x, y, seed), _)| ((x, y, seed), format!("{:#018x}", hash(x, y, seed))))
        .collect();
    let expected: Vec<_> = GOLDEN
        .iter()
        .map(|&(key, h)| (key, format!("{h:#018x}")))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_unit_value_follows_low_bits() {
    let h = hash(1, 0, 0);
    assert_eq!(unit16(h), (h & 0xFFFF) as f64 / 65535.0);
    assert_eq!(hash_unit(1, 0, 0), unit16(h));
}

#[test]
fn test_hash_is_pure() {
    for seed in [0, 1, 42, u64::MAX] {
        for (x, y) in [(0, 0), (-5, 17), (i64::MAX, i64::MIN)] {
            assert_eq!(hash(x, y, seed), hash(x, y, seed));
        }
    }
}
