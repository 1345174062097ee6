//! DAC (Dígito de Auto-Conferência) computation for boleto barcodes

use super::config::Mod10Overflow;
use crate::error::DecodeError;

/// Weights for modulus 11, applied from the rightmost digit leftwards
const MOD11_WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Modulus used for a check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulus {
    /// Weights 2,1 with digit sums
    Ten,
    /// Weights 2..9
    Eleven,
}

impl Modulus {
    /// Modulus selected by the value identifier (3rd digit of the code)
    pub fn for_value_identifier(id: char) -> Option<Self> {
        match id {
            '6' | '7' => Some(Modulus::Ten),
            '8' | '9' => Some(Modulus::Eleven),
            _ => None,
        }
    }
}

/// Raw check digit of `digits`.
///
/// Modulus 10 returns `10 - (sum % 10)`, which is 10 when the sum is a
/// multiple of ten; see [`Mod10Overflow`]. Modulus 11 returns `sum % 11`
/// with no further adjustment, so 0 through 10 are all possible.
pub fn compute_check_digit(digits: &str, modulus: Modulus) -> Result<u8, DecodeError> {
    let mut sum = 0u32;
    for (pos, c) in digits.chars().rev().enumerate() {
        let d = c.to_digit(10).ok_or(DecodeError::InvalidDigit(c))?;
        sum += match modulus {
            Modulus::Ten => {
                let product = d * if pos % 2 == 0 { 2 } else { 1 };
                product / 10 + product % 10
            }
            Modulus::Eleven => d * MOD11_WEIGHTS[pos % MOD11_WEIGHTS.len()],
        };
    }

    let digit = match modulus {
        Modulus::Ten => 10 - sum % 10,
        Modulus::Eleven => sum % 11,
    };
    Ok(digit as u8)
}

/// Verify the general check digit in position 4 of a barcode.
///
/// The digit is recomputed over the code with that position removed and
/// compared as text, so a computed 10 never matches. Codes whose value
/// identifier selects no modulus do not verify.
pub fn verify_general_check_digit(code: &str, overflow: Mod10Overflow) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < 4 {
        return false;
    }
    let Some(modulus) = Modulus::for_value_identifier(chars[2]) else {
        log::debug!("value identifier {:?} selects no modulus", chars[2]);
        return false;
    };

    let body: String = chars[..3].iter().chain(&chars[4..]).collect();
    let digit = match compute_check_digit(&body, modulus) {
        Ok(raw) if modulus == Modulus::Ten => overflow.apply(raw),
        Ok(raw) => raw,
        Err(_) => return false,
    };
    digit.to_string() == chars[3].to_string()
}
