/// Greatest common divisor of two signed operands.
///
/// Signs are ignored, `gcd(x, 0) == |x|` and `gcd(0, 0) == 0`. The result
/// is unsigned so that `gcd(i64::MIN, 0)` is representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Whether a reported result matches the oracle. Negative results never do.
pub fn matches(result: i64, a: i64, b: i64) -> bool {
    u64::try_from(result).map_or(false, |r| r == gcd(a, b))
}
