use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

/// Exact rational number, always kept in lowest terms with a positive
/// denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den < BigInt::zero() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }
}

// Reads one side of an `a/b` input: an optionally signed integer or decimal,
// with either `.` or `,` as the decimal separator.
fn parse_decimal(text: &str, input: &str) -> Result<Fraction> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let mut parts = digits.split(['.', ',']);
    let whole = parts.next().unwrap_or("");
    let decimals = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err(Error::parse(input, "more than one decimal separator"));
    }
    if whole.is_empty() && decimals.is_empty() {
        return Err(Error::parse(input, "missing digits"));
    }
    if !whole
        .chars()
        .chain(decimals.chars())
        .all(|c| c.is_ascii_digit())
    {
        return Err(Error::parse(input, "unexpected character"));
    }

    let num = BigInt::parse_bytes(format!("{}{}", whole, decimals).as_bytes(), 10)
        .ok_or_else(|| Error::parse(input, "invalid number"))?;
    let den = num_traits::pow(BigInt::from(10), decimals.len());

    Ok(Fraction::new(if negative { -num } else { num }, den))
}

impl FromStr for Fraction {
    type Err = Error;

    /// Accepts `3`, `-2.5`, `1,25`, `7/3` and `1.5/2`; blank input is zero.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Fraction::zero());
        }

        let mut nums = trimmed.split('/');
        let num = nums.next().unwrap_or("");
        let den = nums.next();
        if nums.next().is_some() {
            return Err(Error::parse(s, "more than one '/'"));
        }

        let num = parse_decimal(num, s)?;
        match den {
            None => Ok(num),
            Some(den) => {
                let den = parse_decimal(den, s)?;
                if den.is_zero() {
                    return Err(Error::parse(s, "division by zero"));
                }
                Ok(num / den)
            }
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::new(BigInt::from(value), BigInt::one())
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::new(BigInt::one(), BigInt::one())
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::new(BigInt::zero(), BigInt::one())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Eq for Fraction {}
impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        let a = &self.num * &rhs.den;
        let b = &rhs.num * &self.den;
        a.cmp(&b)
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fr(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_fraction_normalization() {
        let f = Fraction::new(BigInt::from(6), BigInt::from(-4));
        assert_eq!(f.num, BigInt::from(-3));
        assert_eq!(f.den, BigInt::from(2));
        assert_eq!(f.to_string(), "-3/2");
        assert_eq!(Fraction::from(4).to_string(), "4");
    }

    #[test]
    fn test_fraction_arithmetic() {
        assert_eq!(fr("1/2") + fr("1/3"), fr("5/6"));
        assert_eq!(fr("1/2") - fr("1/3"), fr("1/6"));
        assert_eq!(fr("2/3") * fr("9/4"), fr("3/2"));
        assert_eq!(fr("2/3") / fr("4/9"), fr("3/2"));
        assert_eq!(-fr("2/3"), fr("-2/3"));
        assert_eq!(fr("1/3") + fr("2/3"), 1);
        assert!(fr("-1/2") < fr("1/3"));
    }

    #[test]
    fn test_fraction_parse() {
        assert_eq!(fr("  "), 0);
        assert_eq!(fr(""), 0);
        assert_eq!(fr("  42 "), 42);
        assert_eq!(fr("-7"), -7);
        assert_eq!(fr("+3"), 3);
        assert_eq!(fr("2.5"), fr("5/2"));
        assert_eq!(fr("-1,25"), fr("-5/4"));
        assert_eq!(fr(".5"), fr("1/2"));
        assert_eq!(fr("1.5/3"), fr("1/2"));
        assert_eq!(fr(" 6 / -4 "), fr("-3/2"));
    }

    #[test]
    fn test_fraction_parse_errors() {
        for input in ["abc", "1/0", "1/2/3", "1.2.3", "-", "1e5", "3/"] {
            match input.parse::<Fraction>() {
                Err(Error::Parse { input: got, .. }) => assert_eq!(got, input),
                other => panic!("{} parsed as {:?}", input, other),
            }
        }
    }
}
