// NOTE: constants are wyhash's primes. only the first two participate in mixing; the remaining
// three are kept so that the full set of the family is in one place.
pub const WYP0: u64 = 0xa0761d6478bd642f;
pub const WYP1: u64 = 0xe7037ed1a0b428db;
pub const WYP2: u64 = 0x8ebc6af09c88c6e3;
pub const WYP3: u64 = 0x589965cc75374cc3;
pub const WYP4: u64 = 0x1d8e4e27c47d124f;

/// folds `b` into `a` and scrambles the result so that every input bit affects (almost) every
/// output bit.
///
/// all multiplications wrap; the overflow is intentionally discarded.
#[inline(always)]
pub const fn mix(mut a: u64, b: u64) -> u64 {
    a ^= b;
    a = a.wrapping_mul(WYP0);
    a ^= (a >> 32) ^ (a >> 25);
    a = a.wrapping_mul(WYP1);
    a ^= a >> 33;
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_odd() {
        for c in [WYP0, WYP1, WYP2, WYP3, WYP4] {
            assert_eq!(c & 1, 1, "{c:#x}");
        }
    }

    #[test]
    fn test_zero_is_fixed_point() {
        assert_eq!(mix(0, 0), 0);
    }

    #[test]
    fn test_xor_symmetry() {
        // a and b are xored before anything else happens
        assert_eq!(mix(1, 0), mix(0, 1));
        assert_eq!(mix(0xdead, 0xbeef), mix(0xbeef, 0xdead));
        assert_eq!(mix(42, 42), 0);
    }

    #[test]
    fn test_single_bit_flip_spreads() {
        let base = mix(8, 0x6867666564636261);
        let mut bit = 0;
        while bit < 64 {
            let flipped = mix(8, 0x6867666564636261 ^ (1 << bit));
            let diff = (base ^ flipped).count_ones();
            assert!(diff >= 8, "bit {bit} changed only {diff} output bits");
            bit += 1;
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(mix(1, 0), 0x632bb43a003e7cd0);
        assert_eq!(mix(8, 0x6867666564636261), 0x500f1bdd43144c94);
        assert_eq!(mix(0x500f1bdd43144c94, 0), 0xccbd4cd052f20df6);
    }
}
