//!
//! 加法器测试
//!

use ephemeral_seal::add;

#[test]
fn test_add_examples() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-1, 1), 0);
}

#[test]
fn test_add_matches_native_addition() {
    let samples = [-1_000_000_007i64, -42, -1, 0, 1, 7, 65_537, 4_294_967_296];
    for &x in &samples {
        for &y in &samples {
            assert_eq!(add(x, y), x + y);
        }
    }
}
