use crate::error::{CgError, CgResult};

/// Validates that a float is non-negative. NaN is rejected as well.
pub fn non_negative(value: f64, field: &str) -> CgResult<f64> {
    if value.is_nan() || value < 0.0 {
        Err(CgError::Negative {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Splits a phone number into `(country_code, ten_digit_number)`.
///
/// A number of exactly ten digits is kept whole. A longer number is only
/// accepted when no country code was given; its leading digits become the
/// country code.
pub fn phone_digits(number: u64, country_code: Option<u32>) -> CgResult<(Option<u32>, u64)> {
    let digits = number.to_string();
    let invalid = || CgError::InvalidPhoneNumber {
        value: digits.clone(),
    };

    if digits.len() == 10 {
        return Ok((country_code, number));
    }
    if digits.len() > 10 && country_code.is_none() {
        let (cc, rest) = digits.split_at(digits.len() - 10);
        let cc: u32 = cc.parse().map_err(|_| invalid())?;
        let rest: u64 = rest.parse().map_err(|_| invalid())?;
        return Ok((Some(cc), rest));
    }
    Err(invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(non_negative(0.0, "weight").unwrap(), 0.0);
    }

    #[test]
    fn non_negative_accepts_positive() {
        assert_eq!(non_negative(2.5, "weight").unwrap(), 2.5);
    }

    #[test]
    fn non_negative_rejects_negative() {
        assert!(non_negative(-0.1, "weight").is_err());
    }

    #[test]
    fn non_negative_rejects_nan() {
        assert!(non_negative(f64::NAN, "weight").is_err());
    }

    #[test]
    fn phone_digits_keeps_ten_digits() {
        assert_eq!(phone_digits(5551234567, None).unwrap(), (None, 5551234567));
    }

    #[test]
    fn phone_digits_keeps_explicit_country_code() {
        assert_eq!(phone_digits(5551234567, Some(44)).unwrap(), (Some(44), 5551234567));
    }

    #[test]
    fn phone_digits_splits_country_code() {
        assert_eq!(phone_digits(15551234567, None).unwrap(), (Some(1), 5551234567));
    }

    #[test]
    fn phone_digits_rejects_long_number_with_country_code() {
        assert!(phone_digits(15551234567, Some(1)).is_err());
    }

    #[test]
    fn phone_digits_rejects_short_number() {
        assert!(phone_digits(5551234, None).is_err());
    }
}
