//! Normalized mixed-number rationals.
//!
//! A [`Rational`] stores a whole part plus a proper fractional remainder.
//! The raw triple given to [`Rational::new`] is normalized immediately, so two
//! equal values always have the same representation.

use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// A normalized `whole + num/den` value.
///
/// Invariants after construction:
/// - `den > 0`
/// - `0 <= |num| < den`
/// - `num` and `den` share no common factor greater than 1
/// - when both `whole` and `num` are non-zero they have the same sign, so the
///   sign of the whole value is carried by `whole` (or by `num` when `whole == 0`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    whole: i64,
    num: i64,
    den: i64,
}

/// Error returned by the strict [`FromStr`] implementation of [`Rational`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The input was empty or whitespace.
    #[error("empty rational literal")]
    Empty,
    /// The input is not one of `<int>`, `<int>/<int>`, `<int> <int>/<int>`.
    #[error("malformed rational literal: {0:?}")]
    Malformed(String),
    /// One of the numerals is not a valid 64-bit integer.
    #[error("invalid numeral: {0}")]
    InvalidNumeral(#[from] ParseIntError),
}

impl Rational {
    /// The zero value `0` (stored as `0 0/1`).
    pub const ZERO: Self = Self {
        whole: 0,
        num: 0,
        den: 1,
    };

    /// Creates a rational from a raw `(whole, num, den)` triple and normalizes it.
    ///
    /// A zero denominator is read as 1 and a negative denominator moves its
    /// sign onto the numerator. When `whole` is negative and `num` positive the
    /// triple is read as a mixed numeral, so `(-3, 1, 4)` is `-3 1/4`; every
    /// other combination is plain `whole + num/den`.
    ///
    /// A whole part that no longer fits in 64 bits after folding saturates.
    #[must_use]
    pub fn new(whole: i64, num: i64, den: i64) -> Self {
        let whole = i128::from(whole);
        let mut num = i128::from(num);
        let mut den = i128::from(den);

        if den == 0 {
            den = 1;
        }
        if den < 0 {
            den = -den;
            num = -num;
        }
        if whole < 0 && num > 0 {
            num = -num;
        }

        let mut total = whole * den + num;
        reduce(&mut total, &mut den);

        // Only reachable with a denominator of exactly 2^63.
        while den > i128::from(i64::MAX) {
            total /= 2;
            den /= 2;
            reduce(&mut total, &mut den);
        }

        let folded = total / den;
        let remainder = total % den;
        // `den` was checked above and `|remainder| < den`.
        let den = i64::try_from(den).unwrap_or(i64::MAX);
        let num = i64::try_from(remainder).unwrap_or(0);

        match i64::try_from(folded) {
            Ok(whole) => Self { whole, num, den },
            Err(_) => Self {
                whole: if folded < 0 { i64::MIN } else { i64::MAX },
                num: 0,
                den: 1,
            },
        }
    }

    /// Creates a rational with no fractional part.
    #[must_use]
    pub const fn from_whole(whole: i64) -> Self {
        Self {
            whole,
            num: 0,
            den: 1,
        }
    }

    /// The whole part.
    #[must_use]
    pub const fn whole(&self) -> i64 {
        self.whole
    }

    /// The numerator of the fractional remainder.
    #[must_use]
    pub const fn num(&self) -> i64 {
        self.num
    }

    /// The denominator of the fractional remainder (always positive).
    #[must_use]
    pub const fn den(&self) -> i64 {
        self.den
    }

    /// Returns true if this value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.whole == 0 && self.num == 0
    }

    /// Floating point approximation `whole + num/den`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.whole as f64 + self.num as f64 / self.den as f64
    }

    /// Compares two rationals by cross-multiplying improper numerators.
    ///
    /// Computes `(a.whole*a.den + a.num) * b.den` against
    /// `(b.whole*b.den + b.num) * a.den` in checked 64-bit arithmetic. If
    /// either side overflows, the floating approximations are compared
    /// instead, which may report values that differ only beyond `f64`
    /// precision as equal.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.cross(other.den), other.cross(self.den)) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            _ => self.to_f64().total_cmp(&other.to_f64()),
        }
    }

    fn cross(&self, factor: i64) -> Option<i64> {
        self.whole
            .checked_mul(self.den)?
            .checked_add(self.num)?
            .checked_mul(factor)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

fn reduce(total: &mut i128, den: &mut i128) {
    let g = gcd(total.unsigned_abs(), den.unsigned_abs());
    if g > 1 {
        // g divides den <= 2^63, so it fits.
        let g = i128::try_from(g).unwrap_or(1);
        *total /= g;
        *den /= g;
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(whole: i64) -> Self {
        Self::from_whole(whole)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num == 0 {
            write!(f, "{}", self.whole)
        } else if self.whole == 0 {
            write!(f, "{}/{}", self.num, self.den)
        } else {
            write!(f, "{} {}/{}", self.whole, self.num.unsigned_abs(), self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `<int>`, `<int>/<int>`, or `<int> <int>/<int>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(first) = parts.next() else {
            return Err(ParseRationalError::Empty);
        };
        let second = parts.next();
        if parts.next().is_some() {
            return Err(ParseRationalError::Malformed(s.to_string()));
        }

        match second {
            Some(fraction) => {
                let whole = first.parse()?;
                let (num, den) = parse_fraction(fraction, s)?;
                Ok(Self::new(whole, num, den))
            }
            None if first.contains('/') => {
                let (num, den) = parse_fraction(first, s)?;
                Ok(Self::new(0, num, den))
            }
            None => Ok(Self::from_whole(first.parse()?)),
        }
    }
}

fn parse_fraction(text: &str, input: &str) -> Result<(i64, i64), ParseRationalError> {
    let (num, den) = text
        .split_once('/')
        .ok_or_else(|| ParseRationalError::Malformed(input.to_string()))?;
    Ok((num.parse()?, den.parse()?))
}
