//! Numeral bases and the number format used by every numeric codec.
//!
//! A numeric field written in any radix other than ten starts with a radix marker
//! `<radix>r` (so `255` in base 16 is written `16rff`). Compact floats are always
//! marked because their payload is an IEEE-754 bit pattern rather than decimal
//! text. Readers look at the marker, never at the base configured at read time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, InteropError};

const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A positional numeral system with radix in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBase")]
pub struct Base {
    radix: u32,
    uppercase: bool,
}

#[derive(Deserialize)]
struct RawBase {
    radix: u32,
    #[serde(default)]
    uppercase: bool,
}

impl TryFrom<RawBase> for Base {
    type Error = InteropError;

    fn try_from(raw: RawBase) -> Result<Self, Self::Error> {
        Ok(Base::new(raw.radix)?.with_uppercase(raw.uppercase))
    }
}

impl Default for Base {
    fn default() -> Self {
        Base::BASE10
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base{}", self.radix)
    }
}

impl Base {
    /// Binary.
    pub const BASE2: Base = Base::fixed(2);
    /// Octal.
    pub const BASE8: Base = Base::fixed(8);
    /// Decimal, the default everywhere.
    pub const BASE10: Base = Base::fixed(10);
    /// Hexadecimal with lowercase digits.
    pub const BASE16: Base = Base::fixed(16);
    /// The largest supported radix.
    pub const BASE36: Base = Base::fixed(36);

    const fn fixed(radix: u32) -> Self {
        Self {
            radix,
            uppercase: false,
        }
    }

    /// Creates a base, rejecting radices outside `2..=36`.
    pub fn new(radix: u32) -> Result<Self, InteropError> {
        if !(2..=36).contains(&radix) {
            return Err(InteropError::InvalidArgument(
                ErrorInfo::new("radix-out-of-range", "radix must lie in 2..=36")
                    .with_context("radix", radix.to_string()),
            ));
        }
        Ok(Self::fixed(radix))
    }

    /// Returns a copy that writes letter digits in uppercase.
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Radix of this base.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Whether letter digits are written in uppercase.
    pub fn is_uppercase(&self) -> bool {
        self.uppercase
    }

    /// Writes `value` without a sign.
    pub fn unsigned(&self, mut value: u64) -> String {
        if value == 0 {
            return "0".to_string();
        }
        let digits = if self.uppercase {
            DIGITS_UPPER
        } else {
            DIGITS_LOWER
        };
        let radix = u64::from(self.radix);
        let mut buf = Vec::with_capacity(64);
        while value > 0 {
            buf.push(digits[(value % radix) as usize]);
            value /= radix;
        }
        buf.reverse();
        buf.into_iter().map(char::from).collect()
    }

    /// Writes `value` with a leading `-` when negative.
    pub fn signed(&self, value: i64) -> String {
        if value < 0 {
            format!("-{}", self.unsigned(value.unsigned_abs()))
        } else {
            self.unsigned(value as u64)
        }
    }

    /// Parses an unsigned number; digits are case-insensitive.
    pub fn read_u64(&self, text: &str) -> Result<u64, InteropError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        u64::from_str_radix(digits, self.radix).map_err(|err| self.parse_error(text, err))
    }

    /// Parses a signed number; digits are case-insensitive.
    pub fn read_i64(&self, text: &str) -> Result<i64, InteropError> {
        let trimmed = text.trim();
        match trimmed.strip_prefix('-') {
            Some(rest) => {
                let magnitude = self.read_u64(rest)?;
                if magnitude > i64::MIN.unsigned_abs() {
                    return Err(self.parse_error(text, "magnitude exceeds i64"));
                }
                Ok((magnitude as i64).wrapping_neg())
            }
            None => {
                let magnitude = self.read_u64(trimmed)?;
                i64::try_from(magnitude).map_err(|err| self.parse_error(text, err))
            }
        }
    }

    fn parse_error(&self, text: &str, err: impl ToString) -> InteropError {
        InteropError::Codec(
            ErrorInfo::new("number-parse", err.to_string())
                .with_context("token", text)
                .with_context("radix", self.radix.to_string()),
        )
    }
}

/// Splits an optional `<radix>r` marker off the front of a numeric field.
pub fn split_marker(text: &str) -> Result<(Option<Base>, &str), InteropError> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || text.as_bytes().get(digits) != Some(&b'r') {
        return Ok((None, text));
    }
    let marker_error = |message: &str| {
        InteropError::Codec(ErrorInfo::new("radix-marker", message).with_context("field", text))
    };
    let radix: u32 = text[..digits]
        .parse()
        .map_err(|_| marker_error("radix marker is not a number"))?;
    let base = Base::new(radix).map_err(|_| marker_error("radix marker must lie in 2..=36"))?;
    Ok((Some(base), &text[digits + 1..]))
}

/// Number formatting policy consulted by codecs at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Radix for integers and compact floats.
    pub base: Base,
    /// Write floats as decimal text (`true`) or as marked bit patterns (`false`).
    pub legible_floats: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            base: Base::BASE10,
            legible_floats: true,
        }
    }
}

impl NumberFormat {
    /// Creates a format from its two settings.
    pub fn new(base: Base, legible_floats: bool) -> Self {
        Self {
            base,
            legible_floats,
        }
    }

    fn marker(&self) -> String {
        format!("{}r", self.base.radix)
    }

    /// Prefixes `payload` with the radix marker unless the base is decimal.
    pub fn mark(&self, payload: String) -> String {
        if self.base.radix == 10 {
            payload
        } else {
            format!("{}{payload}", self.marker())
        }
    }

    /// Writes a signed integer field.
    pub fn write_i64(&self, value: i64) -> String {
        self.mark(self.base.signed(value))
    }

    /// Writes an unsigned integer field.
    pub fn write_u64(&self, value: u64) -> String {
        self.mark(self.base.unsigned(value))
    }

    /// Reads a signed integer field written by any base.
    pub fn read_i64(&self, text: &str) -> Result<i64, InteropError> {
        let (base, payload) = split_marker(text.trim())?;
        base.unwrap_or(Base::BASE10).read_i64(payload)
    }

    /// Reads an unsigned integer field written by any base.
    pub fn read_u64(&self, text: &str) -> Result<u64, InteropError> {
        let (base, payload) = split_marker(text.trim())?;
        base.unwrap_or(Base::BASE10).read_u64(payload)
    }

    /// Joins integers with single spaces, marking the field once.
    pub fn join_i64<I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = i64>,
    {
        let body = values
            .into_iter()
            .map(|value| self.base.signed(value))
            .collect::<Vec<_>>()
            .join(" ");
        self.mark(body)
    }

    /// Splits a field produced by [`NumberFormat::join_i64`].
    pub fn split_i64(&self, text: &str) -> Result<Vec<i64>, InteropError> {
        let (base, payload) = split_marker(text.trim())?;
        let base = base.unwrap_or(Base::BASE10);
        payload
            .split_whitespace()
            .map(|token| base.read_i64(token))
            .collect()
    }

    /// Writes a double.
    pub fn write_f64(&self, value: f64) -> String {
        if self.legible_floats {
            legible_f64(value)
        } else {
            format!(
                "{}{}",
                self.marker(),
                self.base.signed(value.to_bits() as i64)
            )
        }
    }

    /// Writes a float.
    pub fn write_f32(&self, value: f32) -> String {
        if self.legible_floats {
            legible_f32(value)
        } else {
            format!(
                "{}{}",
                self.marker(),
                self.base.signed(i64::from(value.to_bits() as i32))
            )
        }
    }

    /// Reads a double written in either float mode.
    pub fn read_f64(&self, text: &str) -> Result<f64, InteropError> {
        match split_marker(text.trim())? {
            (Some(base), payload) => Ok(f64::from_bits(base.read_i64(payload)? as u64)),
            (None, payload) => parse_decimal(payload),
        }
    }

    /// Reads a float written in either float mode.
    pub fn read_f32(&self, text: &str) -> Result<f32, InteropError> {
        match split_marker(text.trim())? {
            (Some(base), payload) => bits_to_f32(base, payload),
            (None, payload) => parse_decimal::<f32>(payload),
        }
    }

    /// Joins doubles with single spaces.
    pub fn join_f64<I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = f64>,
    {
        if self.legible_floats {
            values
                .into_iter()
                .map(legible_f64)
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            let body = values
                .into_iter()
                .map(|value| self.base.signed(value.to_bits() as i64))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{body}", self.marker())
        }
    }

    /// Joins floats with single spaces.
    pub fn join_f32<I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = f32>,
    {
        if self.legible_floats {
            values
                .into_iter()
                .map(legible_f32)
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            let body = values
                .into_iter()
                .map(|value| self.base.signed(i64::from(value.to_bits() as i32)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{body}", self.marker())
        }
    }

    /// Splits a field produced by [`NumberFormat::join_f64`].
    pub fn split_f64(&self, text: &str) -> Result<Vec<f64>, InteropError> {
        match split_marker(text.trim())? {
            (Some(base), payload) => payload
                .split_whitespace()
                .map(|token| Ok(f64::from_bits(base.read_i64(token)? as u64)))
                .collect(),
            (None, payload) => payload.split_whitespace().map(parse_decimal).collect(),
        }
    }

    /// Splits a field produced by [`NumberFormat::join_f32`].
    pub fn split_f32(&self, text: &str) -> Result<Vec<f32>, InteropError> {
        match split_marker(text.trim())? {
            (Some(base), payload) => payload
                .split_whitespace()
                .map(|token| bits_to_f32(base, token))
                .collect(),
            (None, payload) => payload.split_whitespace().map(parse_decimal).collect(),
        }
    }
}

fn bits_to_f32(base: Base, token: &str) -> Result<f32, InteropError> {
    let bits = base.read_i64(token)?;
    let bits = i32::try_from(bits).map_err(|err| InteropError::codec("float-bits", err))?;
    Ok(f32::from_bits(bits as u32))
}

fn parse_decimal<F>(token: &str) -> Result<F, InteropError>
where
    F: std::str::FromStr,
    F::Err: ToString,
{
    token.trim().parse::<F>().map_err(|err| {
        InteropError::Codec(ErrorInfo::new("float-parse", err.to_string()).with_context("token", token))
    })
}

// Plain notation near 1.0, scientific far from it.
fn legible_f64(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || !value.is_finite() || (1e-5..1e16).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

fn legible_f32(value: f32) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || !value.is_finite() || (1e-5..1e16).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}
