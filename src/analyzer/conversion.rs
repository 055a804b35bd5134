// file: src/analyzer/conversion.rs
// description: decimal to binary and hexadecimal conversion by repeated division
// reference: positional numeral systems

use num_bigint::{BigInt, Sign};
use serde::{Serialize, Serializer};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    #[serde(serialize_with = "serialize_decimal")]
    pub decimal: BigInt,
    pub binary: String,
    pub hexadecimal: String,
}

impl Conversion {
    pub fn new(decimal: BigInt) -> Self {
        Self {
            binary: to_binary(&decimal),
            hexadecimal: to_hexadecimal(&decimal),
            decimal,
        }
    }
}

// Arbitrary width, so written as a decimal string rather than a json number.
fn serialize_decimal<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Converts every number independently, keeping dataset order.
pub fn convert_all(numbers: &[BigInt]) -> Vec<Conversion> {
    numbers.iter().cloned().map(Conversion::new).collect()
}

pub fn to_binary(number: &BigInt) -> String {
    to_radix(number, 2)
}

pub fn to_hexadecimal(number: &BigInt) -> String {
    to_radix(number, 16)
}

fn to_radix(number: &BigInt, radix: u32) -> String {
    if number.sign() == Sign::NoSign {
        return "0".to_string();
    }

    // Remainders of repeated division, least significant first.
    let remainders = number.magnitude().to_radix_le(radix);

    let mut text = String::with_capacity(remainders.len() + 1);
    if number.sign() == Sign::Minus {
        text.push('-');
    }
    text.extend(
        remainders
            .iter()
            .rev()
            .map(|&digit| HEX_DIGITS[digit as usize] as char),
    );
    text
}
