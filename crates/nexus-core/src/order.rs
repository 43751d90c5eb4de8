//! # Order Domain Types
//!
//! The order aggregate exchanged between Nexus trade services.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Aggregate                                 │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌─────────────────────┐             │
//! │  │        Order         │  owns    │      OrderItem      │             │
//! │  │  ──────────────────  │ ───────► │  ─────────────────  │             │
//! │  │  id (UUID)           │  0..n    │  line_number        │             │
//! │  │  order_number        │          │  sku                │             │
//! │  │  status / payment    │          │  quantity (≥ 1)     │             │
//! │  │  subtotal/tax/       │          │  unit_price         │             │
//! │  │   shipping/total     │          └─────────────────────┘             │
//! │  │  buyer_id/seller_id  │                                              │
//! │  │  addresses, metadata │  ┌─────────────┐  ┌─────────────────┐        │
//! │  │  edifact_message_id  │  │ OrderStatus │  │ PaymentStatus   │        │
//! │  └──────────────────────┘  └─────────────┘  └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every order has:
//! - `id`: UUID v4 - immutable, used for service-to-service references
//! - `order_number`: human-readable business identifier, shown to partners
//!
//! ## Invariant
//! `total == subtotal + tax + shipping` at all times. The monetary fields
//! are only ever written by [`crate::totals::OrderCalculator`]; nothing else
//! may set them independently.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of a trade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order is being assembled (items being added).
    Draft,
    /// Buyer has placed the order.
    Placed,
    /// Seller has confirmed the order.
    Confirmed,
    /// Goods have left the seller.
    Shipped,
    /// Goods have arrived at the buyer.
    Delivered,
    /// Order was cancelled before fulfilment.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Draft
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// Settlement status of an order, tracked independently of fulfilment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// No payment activity yet.
    Pending,
    /// Funds reserved but not captured.
    Authorized,
    /// Payment captured in full.
    Paid,
    /// Payment returned to the buyer.
    Refunded,
    /// Payment attempt failed.
    Failed,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

// =============================================================================
// Address
// =============================================================================

/// A structured postal address attached to an order.
///
/// All fields are optional: partner systems routinely send partial addresses,
/// and only `country_code` participates in total calculation (tax lookup).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code ("DE", "US", ...).
    pub country_code: Option<String>,
}

impl Address {
    /// Returns the country code if one is present and non-empty.
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref().filter(|c| !c.is_empty())
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
///
/// Owned exclusively by one `Order` (composition): items carry no id of their
/// own and are destroyed with the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// 1-based position of this line within the order.
    pub line_number: u32,
    /// Product SKU - business identifier of the traded item.
    pub sku: String,
    /// Quantity ordered; always at least 1.
    pub quantity: u32,
    /// Price per unit at time of ordering (frozen).
    pub unit_price: Money,
}

impl OrderItem {
    /// Creates a new line item.
    pub fn new(line_number: u32, sku: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        OrderItem {
            line_number,
            sku: sku.into(),
            quantity,
            unit_price,
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A trade transaction between a buyer and a seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Business order number shown to trading partners.
    pub order_number: String,

    /// Fulfilment status.
    pub status: OrderStatus,

    /// When the order was created.
    pub order_date: DateTime<Utc>,

    /// ISO 4217 currency code for all monetary fields.
    pub currency: String,

    /// Sum of all line totals.
    pub subtotal: Money,

    /// Tax on the subtotal, based on the shipping country.
    pub tax: Money,

    /// Shipping cost from the configured policy.
    pub shipping: Money,

    /// Grand total; always `subtotal + tax + shipping`.
    pub total: Money,

    /// Settlement status.
    pub payment_status: PaymentStatus,

    /// Where the goods go.
    pub shipping_address: Option<Address>,

    /// Where the invoice goes.
    pub billing_address: Option<Address>,

    /// Buyer party identifier (GLN or internal id).
    pub buyer_id: Option<String>,

    /// Seller party identifier (GLN or internal id).
    pub seller_id: Option<String>,

    /// Free-form key/value annotations from upstream services.
    #[serde(default)]
    pub metadata: HashMap<String, String>,

    /// Line items, in order-entry sequence.
    pub items: Vec<OrderItem>,

    /// Message id of the most recently generated EDIFACT ORDERS message.
    pub edifact_message_id: Option<String>,
}

impl Order {
    /// Creates a new draft order with zero monetary fields and no items.
    pub fn new(order_number: impl Into<String>, currency: impl Into<String>) -> Self {
        Order {
            id: Uuid::new_v4(),
            order_number: order_number.into(),
            status: OrderStatus::Draft,
            order_date: Utc::now(),
            currency: currency.into(),
            subtotal: Money::zero(),
            tax: Money::zero(),
            shipping: Money::zero(),
            total: Money::zero(),
            payment_status: PaymentStatus::Pending,
            shipping_address: None,
            billing_address: None,
            buyer_id: None,
            seller_id: None,
            metadata: HashMap::new(),
            items: Vec::new(),
            edifact_message_id: None,
        }
    }

    /// Returns the number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the order has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line number the next appended item should carry.
    #[inline]
    pub fn next_line_number(&self) -> u32 {
        self.items.len() as u32 + 1
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
