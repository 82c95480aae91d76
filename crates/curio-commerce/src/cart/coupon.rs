//! Coupon codes and their validation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// What a coupon does to the order once applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponEffect {
    /// Fraction of the subtotal taken off, e.g. 0.10 for 10%.
    PercentOff(f64),
    /// Waives the shipping charge regardless of subtotal.
    FreeShipping,
}

/// A redeemable discount code with an optional validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub description: String,
    pub effect: CouponEffect,
    pub starts_at: Option<i64>,
    pub ends_at: Option<i64>,
    pub active: bool,
}

impl Coupon {
    pub fn percent_off(
        code: impl Into<String>,
        description: impl Into<String>,
        fraction: f64,
    ) -> Self {
        Coupon {
            code: code.into().to_uppercase(),
            description: description.into(),
            effect: CouponEffect::PercentOff(fraction),
            starts_at: None,
            ends_at: None,
            active: true,
        }
    }

    pub fn free_shipping(code: impl Into<String>, description: impl Into<String>) -> Self {
        Coupon {
            code: code.into().to_uppercase(),
            description: description.into(),
            effect: CouponEffect::FreeShipping,
            starts_at: None,
            ends_at: None,
            active: true,
        }
    }

    pub fn with_window(mut self, starts_at: Option<i64>, ends_at: Option<i64>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    /// The fraction of the subtotal this coupon removes (0.0 for
    /// free-shipping coupons).
    pub fn discount_fraction(&self) -> f64 {
        match self.effect {
            CouponEffect::PercentOff(fraction) => fraction,
            CouponEffect::FreeShipping => 0.0,
        }
    }

    pub fn waives_shipping(&self) -> bool {
        matches!(self.effect, CouponEffect::FreeShipping)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(current_timestamp())
    }

    /// Active and within the start/end window at `now`. Missing bounds
    /// are open-ended.
    pub fn is_valid_at(&self, now: i64) -> bool {
        if !self.active {
            return false;
        }
        if let Some(starts_at) = self.starts_at {
            if now < starts_at {
                return false;
            }
        }
        if let Some(ends_at) = self.ends_at {
            if now > ends_at {
                return false;
            }
        }
        true
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        matches!(self.ends_at, Some(ends_at) if now > ends_at)
    }
}

/// Looks up and validates coupon codes against a known table.
#[derive(Debug, Clone)]
pub struct CouponValidator {
    coupons: HashMap<String, Coupon>,
}

impl CouponValidator {
    /// The standing promotional codes.
    pub fn with_defaults() -> Self {
        Self::with_coupons(vec![
            Coupon::percent_off("WELCOME10", "10% off your first order", 0.10),
            Coupon::percent_off("SAVE20", "20% off sitewide", 0.20),
            Coupon::free_shipping("FREESHIP", "Free shipping on any order"),
        ])
    }

    pub fn with_coupons(coupons: Vec<Coupon>) -> Self {
        CouponValidator {
            coupons: coupons
                .into_iter()
                .map(|c| (c.code.clone(), c))
                .collect(),
        }
    }

    pub fn validate(&self, code: &str) -> Result<Coupon, StorefrontError> {
        self.validate_at(code, current_timestamp())
    }

    /// Look up `code` (case-insensitive) and check its validity window
    /// against `now`.
    pub fn validate_at(&self, code: &str, now: i64) -> Result<Coupon, StorefrontError> {
        let normalized = code.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(StorefrontError::InvalidCoupon(code.to_string()));
        }
        let coupon = self
            .coupons
            .get(&normalized)
            .ok_or_else(|| StorefrontError::InvalidCoupon(normalized.clone()))?;
        if coupon.is_expired_at(now) {
            return Err(StorefrontError::CouponExpired(normalized));
        }
        if !coupon.is_valid_at(now) {
            return Err(StorefrontError::InvalidCoupon(normalized));
        }
        Ok(coupon.clone())
    }
}

impl Default for CouponValidator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codes_resolve() {
        let validator = CouponValidator::with_defaults();

        let coupon = validator.validate("WELCOME10").unwrap();
        assert_eq!(coupon.discount_fraction(), 0.10);

        let coupon = validator.validate("FREESHIP").unwrap();
        assert!(coupon.waives_shipping());
        assert_eq!(coupon.discount_fraction(), 0.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let validator = CouponValidator::with_defaults();
        let coupon = validator.validate("  save20 ").unwrap();
        assert_eq!(coupon.code, "SAVE20");
    }

    #[test]
    fn test_unknown_code_rejected() {
        let validator = CouponValidator::with_defaults();
        let err = validator.validate("BOGUS").unwrap_err();
        assert_eq!(err, StorefrontError::InvalidCoupon("BOGUS".to_string()));
    }

    #[test]
    fn test_empty_code_rejected_without_lookup() {
        let validator = CouponValidator::with_defaults();
        assert!(matches!(
            validator.validate("   "),
            Err(StorefrontError::InvalidCoupon(_))
        ));
    }

    #[test]
    fn test_expired_coupon_reports_expiry() {
        let coupon =
            Coupon::percent_off("HOLIDAY", "Holiday sale", 0.15).with_window(None, Some(1_000));
        let validator = CouponValidator::with_coupons(vec![coupon]);

        assert!(validator.validate_at("HOLIDAY", 999).is_ok());
        assert_eq!(
            validator.validate_at("HOLIDAY", 1_001).unwrap_err(),
            StorefrontError::CouponExpired("HOLIDAY".to_string())
        );
    }

    #[test]
    fn test_not_yet_started_coupon_invalid() {
        let coupon =
            Coupon::percent_off("LAUNCH", "Launch promo", 0.25).with_window(Some(5_000), None);
        let validator = CouponValidator::with_coupons(vec![coupon]);

        assert!(matches!(
            validator.validate_at("LAUNCH", 4_999),
            Err(StorefrontError::InvalidCoupon(_))
        ));
        assert!(validator.validate_at("LAUNCH", 5_000).is_ok());
    }

    #[test]
    fn test_inactive_coupon_invalid() {
        let mut coupon = Coupon::percent_off("PAUSED", "Paused promo", 0.30);
        coupon.active = false;
        let validator = CouponValidator::with_coupons(vec![coupon]);

        assert!(matches!(
            validator.validate_at("PAUSED", 0),
            Err(StorefrontError::InvalidCoupon(_))
        ));
    }

    #[test]
    fn test_custom_table_overrides_defaults() {
        let validator =
            CouponValidator::with_coupons(vec![Coupon::percent_off("VIP50", "Half off", 0.50)]);

        assert!(validator.validate("VIP50").is_ok());
        assert!(validator.validate("WELCOME10").is_err());
    }
}
