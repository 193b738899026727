//! Modular reduction into [0, q)

/// Modular arithmetic operations over Z_q
pub struct ModQ;

impl ModQ {
    /// Reduce a signed value into [0, q) with a true modulo
    ///
    /// `%` on a negative left operand yields a negative remainder, so the
    /// reduction goes through `rem_euclid`.
    #[inline]
    pub fn from_signed(val: i64, q: u64) -> u64 {
        val.rem_euclid(q as i64) as u64
    }

    /// Check that a value already lies in [0, q)
    #[inline]
    pub fn is_reduced(a: u64, q: u64) -> bool {
        a < q
    }
}
