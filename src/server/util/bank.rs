//! IBAN and BIC validation.
//!
//! Both validators are pure functions: they normalize the raw input, check it against a
//! process-wide compiled pattern and, for IBANs, verify the ISO 7064 MOD 97-10 check digits.
//! Successful validation yields a newtype so that only normalized values reach persistence.

use regex::Regex;
use std::sync::LazyLock;

use crate::server::error::bank::BankDetailsError;

static IBAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}$").expect("Invalid IBAN regex pattern")
});

static BIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("Invalid BIC regex pattern")
});

/// A validated IBAN: uppercase, without spaces, with correct check digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iban(String);

impl Iban {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A validated 8 or 11 character BIC in uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bic(String);

impl Bic {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Validated bank account details of a café.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDetails {
    pub iban: Iban,
    pub bic: Bic,
}

/// Validates and normalizes an IBAN.
///
/// Space characters are removed and letters uppercased before validation.
///
/// # Arguments
/// - `raw` - IBAN as entered by the user, e.g. `"de89 3704 0044 0532 0130 00"`
///
/// # Returns
/// - `Ok(Iban)` - Normalized IBAN
/// - `Err(BankDetailsError::IbanFormat)` - Wrong length or characters
/// - `Err(BankDetailsError::IbanChecksum)` - Well-formed but the check digits do not match
pub fn validate_iban(raw: &str) -> Result<Iban, BankDetailsError> {
    let normalized: String = raw
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if !IBAN_PATTERN.is_match(&normalized) {
        return Err(BankDetailsError::IbanFormat);
    }

    if mod97(&normalized) != 1 {
        return Err(BankDetailsError::IbanChecksum);
    }

    Ok(Iban(normalized))
}

/// Validates and normalizes a BIC.
///
/// Surrounding whitespace is trimmed and letters uppercased before validation.
///
/// # Returns
/// - `Ok(Bic)` - Normalized BIC
/// - `Err(BankDetailsError::BicFormat)` - Not an 8 or 11 character BIC
pub fn validate_bic(raw: &str) -> Result<Bic, BankDetailsError> {
    let normalized = raw.trim().to_ascii_uppercase();

    if !BIC_PATTERN.is_match(&normalized) {
        return Err(BankDetailsError::BicFormat);
    }

    Ok(Bic(normalized))
}

/// Validates an IBAN and a BIC together, IBAN first.
pub fn validate_bank_details(iban: &str, bic: &str) -> Result<BankDetails, BankDetailsError> {
    let iban = validate_iban(iban)?;
    let bic = validate_bic(bic)?;

    Ok(BankDetails { iban, bic })
}

/// Remainder of the rearranged IBAN modulo 97.
///
/// The country code and check digits move to the end and every letter expands to two digits
/// (A = 10 … Z = 35). The remainder is folded in digit by digit so no big integer is needed.
/// Expects input already matching `IBAN_PATTERN`.
fn mod97(iban: &str) -> u32 {
    let (head, tail) = iban.split_at(4);

    tail.bytes().chain(head.bytes()).fold(0, |rem, b| match b {
        b'0'..=b'9' => (rem * 10 + u32::from(b - b'0')) % 97,
        _ => (rem * 100 + u32::from(b - b'A') + 10) % 97,
    })
}
