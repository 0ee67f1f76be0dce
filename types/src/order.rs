use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{Resource, ResourceKind, resource::never_empty};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Delivered and cancelled orders no longer change.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Statuses an admin may move an order in this status to.
    pub fn next(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Processing, Self::Cancelled],
            Self::Processing => &[Self::Shipped, Self::Cancelled],
            Self::Shipped => &[Self::Delivered],
            Self::Delivered | Self::Cancelled => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: i64,
}

impl OrderLine {
    pub fn subtotal(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub number: String,
    pub customer_email: String,
    #[serde(default)]
    pub shop_id: Option<String>,
    pub status: OrderStatus,
    /// Minor currency units, as charged.
    pub total: i64,
    pub created_at: Timestamp,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl Resource for Order {
    const KIND: ResourceKind = ResourceKind::Order;

    fn id(&self) -> &str {
        &self.id
    }
}

never_empty!(Order);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_statuses_have_no_transitions() {
        for status in OrderStatus::ALL {
            assert_eq!(status.is_final(), status.next().is_empty());
        }
    }

    #[test]
    fn wire_names_match_as_str() {
        for status in OrderStatus::ALL {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn line_subtotal() {
        let line = OrderLine {
            product_id: "p1".into(),
            name: "Mug".into(),
            quantity: 3,
            unit_price: 1250,
        };
        assert_eq!(line.subtotal(), 3750);
    }
}
