use num_bigint::BigInt;
use num_traits::{One, Zero};

/// n! as an exact integer.
pub fn factorial(n: u32) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, k| acc * k)
}

/// C(n, k), zero when k > n.
pub fn binomial(n: u32, k: u32) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    // C(n, k) == C(n, n - k); iterate over the shorter side.
    let k = k.min(n - k);
    let mut result = BigInt::one();
    for i in 0..k {
        // Exact at every step: the running product is C(n, i + 1).
        result = result * (n - i) / (i + 1);
    }
    result
}

/// C(n, k) for any integer n: n (n - 1) ... (n - k + 1) / k!.
///
/// Matches [`binomial`] for n >= 0. For n < 0 it equals
/// (-1)^k C(k - n - 1, k).
pub fn generalized_binomial(n: &BigInt, k: u32) -> BigInt {
    let mut result = BigInt::one();
    for i in 0..k {
        // Exact at every step: the running product is C(n, i + 1).
        result = result * (n - i) / (i + 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), BigInt::from(1));
        assert_eq!(factorial(1), BigInt::from(1));
        assert_eq!(factorial(5), BigInt::from(120));
        assert_eq!(factorial(10), BigInt::from(3_628_800));
    }

    #[test]
    fn test_factorial_beyond_u64() {
        let expected: BigInt = "51090942171709440000".parse().unwrap();
        assert_eq!(factorial(21), expected);
    }

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(0, 0), BigInt::from(1));
        assert_eq!(binomial(5, 2), BigInt::from(10));
        assert_eq!(binomial(5, 3), BigInt::from(10));
        assert_eq!(binomial(6, 0), BigInt::from(1));
        assert_eq!(binomial(6, 6), BigInt::from(1));
        assert_eq!(binomial(3, 4), BigInt::from(0));
        assert_eq!(binomial(40, 20), BigInt::from(137_846_528_820_u64));
    }

    #[test]
    fn test_generalized_binomial_negative_upper() {
        let c = |n: i64, k| generalized_binomial(&BigInt::from(n), k);
        assert_eq!(c(-1, 0), BigInt::from(1));
        assert_eq!(c(-1, 3), BigInt::from(-1));
        assert_eq!(c(-2, 1), BigInt::from(-2));
        assert_eq!(c(-3, 2), BigInt::from(6));
        assert_eq!(c(-5, 3), BigInt::from(-35));
    }

    #[test]
    fn test_generalized_binomial_agrees_for_non_negative_upper() {
        for n in 0..12u32 {
            for k in 0..15u32 {
                assert_eq!(generalized_binomial(&BigInt::from(n), k), binomial(n, k), "C({n}, {k})");
            }
        }
    }
}
