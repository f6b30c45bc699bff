//! Integers modulo a compile-time constant.

use std::fmt;
use std::iter::{Product, Sum};
use std::num::ParseIntError;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

pub const MOD: u32 = 1_000_000_007;

pub type Mint = ModInt<MOD>;

/// Residue in `[0, M)`.
///
/// `M` must be at least 2. [`ModInt::inv`] and division additionally require
/// `M` to be prime.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModInt<const M: u32> {
    val: u32,
}

impl<const M: u32> ModInt<M> {
    pub const ZERO: Self = Self { val: 0 };
    pub const ONE: Self = Self { val: 1 % M };

    /// Reduces `v` into `[0, M)`; negative inputs wrap around.
    pub fn new(v: i64) -> Self {
        Self {
            val: v.rem_euclid(M as i64) as u32,
        }
    }

    pub const fn modulus() -> u32 {
        M
    }

    pub const fn value(self) -> u32 {
        self.val
    }

    /// `self^exp` by repeated squaring.
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse by Fermat's little theorem (`M` prime).
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub fn inv(self) -> Self {
        assert!(self.val != 0, "zero has no inverse modulo {M}");
        self.pow(M as u64 - 2)
    }
}

impl<const M: u32> From<i64> for ModInt<M> {
    fn from(v: i64) -> Self {
        Self::new(v)
    }
}

impl<const M: u32> From<ModInt<M>> for u32 {
    fn from(m: ModInt<M>) -> Self {
        m.val
    }
}

impl<const M: u32> FromStr for ModInt<M> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim().parse::<i64>()?))
    }
}

impl<const M: u32> fmt::Display for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.val, f)
    }
}

impl<const M: u32> fmt::Debug for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {M})", self.val)
    }
}

impl<const M: u32> AddAssign for ModInt<M> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        let sum = self.val as u64 + rhs.val as u64;
        self.val = (if sum >= M as u64 { sum - M as u64 } else { sum }) as u32;
    }
}

impl<const M: u32> SubAssign for ModInt<M> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.val = if self.val >= rhs.val {
            self.val - rhs.val
        } else {
            self.val + (M - rhs.val)
        };
    }
}

impl<const M: u32> MulAssign for ModInt<M> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        self.val = (self.val as u64 * rhs.val as u64 % M as u64) as u32;
    }
}

impl<const M: u32> DivAssign for ModInt<M> {
    #[allow(clippy::suspicious_op_assign_impl)]
    fn div_assign(&mut self, rhs: Self) {
        *self *= rhs.inv();
    }
}

macro_rules! forward_binop {
    ($($trait:ident, $method:ident, $assign:ident;)*) => {$(
        impl<const M: u32> $trait for ModInt<M> {
            type Output = Self;

            #[inline(always)]
            fn $method(mut self, rhs: Self) -> Self {
                self.$assign(rhs);
                self
            }
        }

        impl<const M: u32> $trait<i64> for ModInt<M> {
            type Output = Self;

            #[inline(always)]
            fn $method(mut self, rhs: i64) -> Self {
                self.$assign(Self::new(rhs));
                self
            }
        }
    )*};
}

forward_binop! {
    Add, add, add_assign;
    Sub, sub, sub_assign;
    Mul, mul, mul_assign;
    Div, div, div_assign;
}

impl<const M: u32> Neg for ModInt<M> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl<const M: u32> Sum for ModInt<M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, const M: u32> Sum<&'a Self> for ModInt<M> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<const M: u32> Product for ModInt<M> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a, const M: u32> Product<&'a Self> for ModInt<M> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}
