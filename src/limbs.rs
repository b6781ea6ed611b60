//! Arbitrary-precision unsigned integer for base conversion.
//! Little-endian `u64` limbs (low limb first); u128 temporaries carry the
//! cross-limb remainder/overflow.
//! Two hot loops: divmod by a small radix (encode) and Horner multiply-add
//! (decode). Both are O(limbs) per call, O(n^2) per conversion.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Limbs(Vec<u64>);

impl Limbs {
    /// Packs big-endian bytes. Leading zero bytes carry no weight.
    pub(crate) fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs: Vec<u64> = bytes
            .rchunks(8)
            .map(|chunk| chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
            .collect();
        trim(&mut limbs);
        Self(limbs)
    }

    /// Capacity hint in bits; avoids regrowth during Horner accumulation.
    pub(crate) fn with_bits(bits: usize) -> Self {
        Self(Vec::with_capacity(bits / 64 + 1))
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// `self /= radix`, returning `self % radix`. `radix` must be non-zero.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn divmod_small(&mut self, radix: u64) -> u64 {
        let divisor = u128::from(radix);
        let mut remainder = 0u128;
        // High limb first.
        for limb in self.0.iter_mut().rev() {
            let temp = (remainder << 64) | u128::from(*limb);
            *limb = (temp / divisor) as u64;
            remainder = temp % divisor;
        }
        trim(&mut self.0);
        remainder as u64
    }

    /// `self = self * mul + add`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn mul_add_small(&mut self, mul: u64, add: u64) {
        let mut carry = u128::from(add);
        for limb in &mut self.0 {
            let temp = u128::from(*limb) * u128::from(mul) + carry;
            *limb = temp as u64;
            carry = temp >> 64;
        }
        if carry != 0 {
            self.0.push(carry as u64);
        }
    }

    /// Minimal big-endian bytes; zero yields an empty vector.
    pub(crate) fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() * 8);
        for limb in self.0.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        let zeros = out.iter().take_while(|&&b| b == 0).count();
        out.drain(..zeros);
        out
    }
}

// Drop zero limbs from the high end so `is_zero` is a length check.
fn trim(limbs: &mut Vec<u64>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}
