//! Validation utilities for operator-entered documents
//!
//! This module validates the Brazilian document formats the panel works with:
//! client CNPJ numbers and vehicle license plates (legacy and Mercosul).

use crate::utils::error::{PanelError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static PLACA_LEGACY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").expect("hard-coded pattern"));
static PLACA_MERCOSUL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").expect("hard-coded pattern"));

/// Document validation utilities
pub struct DocumentValidator;

impl DocumentValidator {
    /// Validate a CNPJ, with or without punctuation.
    ///
    /// Checks both verification digits with the standard modulo-11 weights
    /// and rejects the all-repeated-digit sequences that pass the arithmetic
    /// but are never issued.
    pub fn validate_cnpj(cnpj: &str) -> Result<()> {
        let digits: Vec<u32> = cnpj.chars().filter_map(|c| c.to_digit(10)).collect();

        if digits.len() != 14 {
            return Err(PanelError::Validation(
                "CNPJ must contain 14 digits".to_string(),
            ));
        }

        if digits.iter().all(|&d| d == digits[0]) {
            return Err(PanelError::Validation(
                "CNPJ cannot be a repeated digit sequence".to_string(),
            ));
        }

        let dv1 = Self::check_digit(&digits[..12], &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
        let dv2 = Self::check_digit(&digits[..13], &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);

        if digits[12] != dv1 || digits[13] != dv2 {
            return Err(PanelError::Validation(
                "CNPJ verification digits do not match".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a vehicle license plate.
    ///
    /// Accepts the legacy `AAA9999` format and the Mercosul `AAA9A99`
    /// format, case-insensitively and ignoring the optional hyphen.
    pub fn validate_placa(placa: &str) -> Result<()> {
        let normalized: String = placa
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != ' ')
            .collect::<String>()
            .to_uppercase();

        if normalized.is_empty() {
            return Err(PanelError::Validation(
                "License plate cannot be empty".to_string(),
            ));
        }

        if PLACA_LEGACY.is_match(&normalized) || PLACA_MERCOSUL.is_match(&normalized) {
            Ok(())
        } else {
            Err(PanelError::Validation(format!(
                "Invalid license plate: {}",
                placa
            )))
        }
    }

    fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
        let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
        let remainder = sum % 11;
        if remainder < 2 { 0 } else { 11 - remainder }
    }
}
