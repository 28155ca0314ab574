use num_bigint::BigUint;

use crate::bitmask::Bitmask;

/// Iterator over the indices of the set bits of a value, lowest first.
pub struct BitIter(BigUint);

/// Iterator over the set bits of a value as single-bit masks, lowest first.
pub struct MaskIter(BigUint);

impl BitIter {
    #[inline(always)]
    pub fn from(val: BigUint) -> Self {
        Self(val)
    }
}

impl Iterator for BitIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.0.trailing_zeros()?;
        self.0.set_bit(result, false);
        Some(result as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let result = self.0.count_ones() as usize;
        (result, Some(result))
    }
}

impl ExactSizeIterator for BitIter {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl MaskIter {
    #[inline(always)]
    pub fn from(val: BigUint) -> Self {
        Self(val)
    }
}

impl Iterator for MaskIter {
    type Item = Bitmask;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.0.trailing_zeros()?;
        self.0.set_bit(idx, false);
        Some(Bitmask::singleton(idx as usize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let result = self.0.count_ones() as usize;
        (result, Some(result))
    }
}

impl ExactSizeIterator for MaskIter {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

/// Every single-bit term of `value`, in increasing order.
pub fn decompose_bits(value: &Bitmask) -> MaskIter {
    value.clone().into_mask_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_decompose_zero_is_empty() {
        assert_eq!(decompose_bits(&Bitmask::empty()).count(), 0);
    }

    #[test]
    fn test_decompose_small_values() {
        let bits = decompose_bits(&Bitmask::from(0b10110u32)).collect_vec();
        assert_eq!(bits, vec![Bitmask::from(0b10u32), Bitmask::from(0b100u32), Bitmask::from(0b10000u32)]);

        let bits = decompose_bits(&Bitmask::from(0b11u32)).collect_vec();
        assert_eq!(bits, vec![Bitmask::from(0b1u32), Bitmask::from(0b10u32)]);
    }

    #[test]
    fn test_decompose_all_ones_is_every_power() {
        let value = Bitmask::low_ones(9200);
        let mut iter = decompose_bits(&value);
        assert_eq!(iter.len(), 9200);
        for idx in 0..9200 {
            assert_eq!(iter.next(), Some(Bitmask::singleton(idx)));
        }
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_decompose_is_restartable() {
        let value = Bitmask::from(0b1001u32);
        let first = decompose_bits(&value).collect_vec();
        let second = decompose_bits(&value).collect_vec();
        assert_eq!(first, second);
        assert_eq!(value, Bitmask::from(0b1001u32));
    }

    #[test]
    fn test_bit_iter_yields_indices() {
        let iter = Bitmask::from(0b1010_0001u32).into_bit_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect_vec(), vec![0, 5, 7]);
    }

    #[test]
    fn test_mask_iter_shrinks_as_it_goes() {
        let mut iter = Bitmask::from(0b1100u32).into_mask_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(Bitmask::from(0b100u32)));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(Bitmask::from(0b1000u32)));
        assert_eq!(iter.next(), None);
    }
}
