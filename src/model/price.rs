//! Offered price decoding
//!
//! Prices arrive as JSON numbers. Strings are refused, and a number that
//! `Decimal` cannot hold is an error instead of a silently altered price.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use std::fmt;
use std::str::FromStr;

/// Deserialize an offered price, `null` reads as zero
pub fn deserialize_offered<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(OfferedVisitor)
}

struct OfferedVisitor;

impl<'de> Visitor<'de> for OfferedVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a numeric price")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }

        let price = Decimal::from_str(&v.to_string())
            .map_err(|_| E::custom(format!("offered price {v} is out of range")))?;

        if price.is_zero() && v != 0.0 {
            return Err(E::custom(format!(
                "offered price {v} is below the supported precision"
            )));
        }

        Ok(price)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }
}
