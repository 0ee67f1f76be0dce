use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{FieldErrors, Resource, ResourceKind, Validate, resource::never_empty};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "percentage" => Some(Self::Percentage),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// `amount` is a percentage for [`DiscountType::Percentage`] and minor currency
/// units for [`DiscountType::Fixed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub min_order: Option<i64>,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub used: u32,
    #[serde(default)]
    pub expires_at: Option<Timestamp>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Coupon {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_uses.is_some_and(|max| self.used >= max)
    }

    /// Whether a customer could redeem this coupon right now.
    pub fn is_redeemable(&self, now: Timestamp) -> bool {
        self.active && !self.is_expired(now) && !self.is_exhausted()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponInput {
    pub code: String,
    pub discount_type: DiscountType,
    pub amount: i64,
    pub min_order: Option<i64>,
    pub max_uses: Option<u32>,
    pub expires_at: Option<Timestamp>,
    pub active: bool,
}

impl Default for CouponInput {
    fn default() -> Self {
        Self {
            code: String::new(),
            discount_type: DiscountType::Percentage,
            amount: 10,
            min_order: None,
            max_uses: None,
            expires_at: None,
            active: true,
        }
    }
}

impl From<&Coupon> for CouponInput {
    fn from(coupon: &Coupon) -> Self {
        Self {
            code: coupon.code.clone(),
            discount_type: coupon.discount_type,
            amount: coupon.amount,
            min_order: coupon.min_order,
            max_uses: coupon.max_uses,
            expires_at: coupon.expires_at,
            active: coupon.active,
        }
    }
}

impl Validate for CouponInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required("code", &self.code);
        let code_ok = (3..=32).contains(&self.code.len())
            && self
                .code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if !self.code.is_empty() && !code_ok {
            errors.add("code", "Use 3 to 32 uppercase letters or digits");
        }
        match self.discount_type {
            DiscountType::Percentage => errors.range("amount", self.amount, 1, 100),
            DiscountType::Fixed if self.amount <= 0 => {
                errors.add("amount", "Amount must be greater than zero")
            }
            DiscountType::Fixed => {}
        }
        if self.min_order.is_some_and(|min| min < 0) {
            errors.add("min_order", "Minimum order cannot be negative");
        }
        if self.max_uses == Some(0) {
            errors.add("max_uses", "Leave empty for unlimited uses");
        }
        errors.into_result()
    }
}

impl Resource for Coupon {
    const KIND: ResourceKind = ResourceKind::Coupon;

    fn id(&self) -> &str {
        &self.id
    }
}

never_empty!(Coupon);

#[cfg(test)]
mod tests {
    use super::*;

    fn input(code: &str, discount_type: DiscountType, amount: i64) -> CouponInput {
        CouponInput {
            code: code.into(),
            discount_type,
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn percentage_must_be_within_range() {
        assert!(input("SAVE10", DiscountType::Percentage, 10).validate().is_ok());
        let errors = input("SAVE10", DiscountType::Percentage, 150)
            .validate()
            .unwrap_err();
        assert_eq!(errors.get("amount"), Some("Must be between 1 and 100"));
    }

    #[test]
    fn fixed_amount_can_exceed_one_hundred() {
        assert!(input("FIVEOFF", DiscountType::Fixed, 500).validate().is_ok());
        assert!(input("FIVEOFF", DiscountType::Fixed, 0).validate().is_err());
    }

    #[test]
    fn code_format() {
        let errors = input("save 10", DiscountType::Percentage, 10)
            .validate()
            .unwrap_err();
        assert!(errors.get("code").is_some());
    }

    #[test]
    fn redeemable() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let mut coupon = Coupon {
            id: "c1".into(),
            code: "SAVE10".into(),
            discount_type: DiscountType::Percentage,
            amount: 10,
            min_order: None,
            max_uses: Some(2),
            used: 1,
            expires_at: Some(Timestamp::from_second(1_800_000_000).unwrap()),
            active: true,
        };
        assert!(coupon.is_redeemable(now));
        coupon.used = 2;
        assert!(!coupon.is_redeemable(now));
        coupon.used = 0;
        coupon.expires_at = Some(now);
        assert!(coupon.is_expired(now));
    }

    #[test]
    fn minimal_backend_coupon() {
        let coupon: Coupon = serde_json::from_str(r#"{"id":"c1","code":"SAVE10"}"#).unwrap();
        assert_eq!(coupon.discount_type, DiscountType::Percentage);
        assert!(coupon.active);
        assert_eq!(CouponInput::from(&coupon).code, "SAVE10");
    }
}
