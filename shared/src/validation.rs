//! Input validation functions
//!
//! Custom validators shared by the backend route layer; the `validator`
//! crate covers email format, everything else is checked here.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex_lite::Regex;

static CIVIL_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static COLOR_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Parse a strict `YYYY-MM-DD` civil date
pub fn parse_civil_date(input: &str) -> Result<NaiveDate, String> {
    if !CIVIL_DATE_RE.is_match(input) {
        return Err(format!("Invalid date format: {}", input));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| format!("Invalid calendar date: {}", input))
}

/// Validate a `#rrggbb` color token
pub fn validate_color_token(color: &str) -> Result<(), String> {
    if COLOR_TOKEN_RE.is_match(color) {
        Ok(())
    } else {
        Err(format!("Invalid color token: {}", color))
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a set weight in kilograms
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 0.0 {
        return Err("Weight cannot be negative".to_string());
    }
    if weight_kg > 1000.0 {
        return Err("Weight unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a rep count
pub fn validate_reps(reps: i32) -> Result<(), String> {
    if reps < 0 {
        return Err("Reps cannot be negative".to_string());
    }
    if reps > 200 {
        return Err("Rep count unreasonably high".to_string());
    }
    Ok(())
}
