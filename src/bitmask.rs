use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Shl, Shr};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::bit_iter::{BitIter, MaskIter};

/// A set of cells packed into an unbounded unsigned integer, one bit per cell.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitmask(BigUint);

impl Bitmask {
    #[inline(always)]
    pub fn empty() -> Self {
        Self(BigUint::zero())
    }

    pub fn singleton(bit: usize) -> Self {
        Self(BigUint::one() << bit)
    }

    /// The mask with the lowest `n` bits set.
    pub fn low_ones(n: usize) -> Self {
        Self((BigUint::one() << n) - 1u32)
    }

    pub fn from_iter<I: IntoIterator<Item = usize>>(bits: I) -> Self {
        bits.into_iter().fold(Self::empty(), |mut acc, bit| {
            acc.set(bit);
            acc
        })
    }

    pub fn into_bit_iter(self) -> BitIter {
        BitIter::from(self.0)
    }

    pub fn into_mask_iter(self) -> MaskIter {
        MaskIter::from(self.0)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_zero()
    }

    #[inline(always)]
    pub fn is_not_empty(&self) -> bool {
        !self.0.is_zero()
    }

    pub fn count_ones(&self) -> u64 {
        self.0.count_ones()
    }

    /// True for exactly the positive powers of two.
    pub fn is_single_bit(&self) -> bool {
        self.0.count_ones() == 1
    }

    /// Bits needed to hold the value; zero for the empty mask.
    pub fn bit_len(&self) -> u64 {
        self.0.bits()
    }

    pub fn contains(&self, bit: usize) -> bool {
        self.0.bit(bit as u64)
    }

    pub fn set(&mut self, bit: usize) {
        self.0.set_bit(bit as u64, true);
    }

    /// True if every bit of `other` is also set in `self`.
    pub fn is_superset_of(&self, other: &Bitmask) -> bool {
        &(self & other) == other
    }
}

macro_rules! bitmask_from_impl {
    ($($t:ty)*) => {$(
        impl From<$t> for Bitmask {
            #[inline(always)]
            fn from(val: $t) -> Self {
                Self(BigUint::from(val))
            }
        }
    )*}
}

bitmask_from_impl! { u8 u16 u32 u64 u128 usize BigUint }

macro_rules! bitmask_binop_impl {
    ($($trait:ident $method:ident $assign_trait:ident $assign_method:ident;)*) => {$(
        impl $trait for Bitmask {
            type Output = Bitmask;

            #[inline(always)]
            fn $method(self, rhs: Bitmask) -> Bitmask {
                Bitmask(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Bitmask> for Bitmask {
            type Output = Bitmask;

            #[inline(always)]
            fn $method(self, rhs: &Bitmask) -> Bitmask {
                Bitmask(self.0.$method(&rhs.0))
            }
        }

        impl $trait<&Bitmask> for &Bitmask {
            type Output = Bitmask;

            #[inline(always)]
            fn $method(self, rhs: &Bitmask) -> Bitmask {
                Bitmask((&self.0).$method(&rhs.0))
            }
        }

        impl $assign_trait for Bitmask {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Bitmask) {
                self.0.$assign_method(rhs.0);
            }
        }

        impl $assign_trait<&Bitmask> for Bitmask {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: &Bitmask) {
                self.0.$assign_method(&rhs.0);
            }
        }
    )*}
}

bitmask_binop_impl! {
    BitAnd bitand BitAndAssign bitand_assign;
    BitOr bitor BitOrAssign bitor_assign;
}

impl Shl<usize> for Bitmask {
    type Output = Bitmask;

    #[inline(always)]
    fn shl(self, rhs: usize) -> Bitmask {
        Bitmask(self.0 << rhs)
    }
}

impl Shl<usize> for &Bitmask {
    type Output = Bitmask;

    #[inline(always)]
    fn shl(self, rhs: usize) -> Bitmask {
        Bitmask(&self.0 << rhs)
    }
}

impl Shr<usize> for Bitmask {
    type Output = Bitmask;

    #[inline(always)]
    fn shr(self, rhs: usize) -> Bitmask {
        Bitmask(self.0 >> rhs)
    }
}

impl Shr<usize> for &Bitmask {
    type Output = Bitmask;

    #[inline(always)]
    fn shr(self, rhs: usize) -> Bitmask {
        Bitmask(&self.0 >> rhs)
    }
}

impl fmt::Binary for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Debug for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitmask({:#b})", self.0)
    }
}
