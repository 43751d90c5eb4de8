//! # EDIFACT ORDERS Message Generation
//!
//! Serializes an order into a UN/EDIFACT ORDERS message (directory D.01B)
//! as a flat segment-terminated string for downstream order exchange.
//!
//! ## Message Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   ORDERS D.01B Segment Sequence                         │
//! │                                                                         │
//! │  UNH+<messageId>+ORDERS:D:01B:UN:EAN010'    message header             │
//! │  BGM+220+<orderNumber>+9'                   begin message (220=order,  │
//! │                                              9=original)               │
//! │  DTM+137:<CCYYMMDDHHMM>:203'                document date              │
//! │  NAD+BY+<buyerId>'                          buyer party                │
//! │  NAD+SE+<sellerId>'                         seller party               │
//! │  ┌─ per line item ──────────────────────────────────────────────┐      │
//! │  │  LIN+<lineNumber>+<sku>:EN'              line item            │      │
//! │  │  QTY+21:<quantity>'                      ordered quantity     │      │
//! │  │  MOA+203:<unitPrice>'                    line amount          │      │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! │  UNT+<segmentCount>+<messageId>'            trailer                    │
//! │                                                                         │
//! │  segmentCount = items × 3 + 5 (the five fixed segments; the UNT        │
//! │  itself is not counted - receiving parsers validate this number)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Syntax: segments terminated by `'`, data elements separated by `+`,
//! composite components by `:`. No separators between segments.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::order::Order;
use crate::validation::{validate_currency_code, validate_order_number, validate_sku};

/// Fixed segments before the line-item loop: UNH, BGM, DTM, NAD+BY, NAD+SE.
const FIXED_SEGMENT_COUNT: usize = 5;

/// chrono format string for DTM qualifier 203 (CCYYMMDDHHMM).
const DTM_203_FORMAT: &str = "%Y%m%d%H%M";

// =============================================================================
// Completeness Check
// =============================================================================

/// Checks that an order carries everything an ORDERS message needs.
///
/// ## Rules
/// - Order number and SKUs must pass field validation, so no EDIFACT
///   service characters (`'`, `+`, `:`) can reach the wire and desync the
///   segment count from the UNT trailer
/// - Currency must be a valid ISO 4217 code
/// - Buyer id must be set and non-empty
/// - Seller id must be set and non-empty
/// - At least one line item
pub fn validate_order_completeness(order: &Order) -> CoreResult<()> {
    let incomplete = |missing: &'static str| CoreError::IncompleteOrder {
        order_number: order.order_number.clone(),
        missing,
    };

    validate_order_number(&order.order_number)?;
    validate_currency_code(&order.currency)?;

    if order.buyer_id.as_deref().map_or(true, str::is_empty) {
        return Err(incomplete("buyer id"));
    }
    if order.seller_id.as_deref().map_or(true, str::is_empty) {
        return Err(incomplete("seller id"));
    }
    if order.items.is_empty() {
        return Err(incomplete("line items"));
    }
    for item in &order.items {
        validate_sku(&item.sku)?;
    }

    Ok(())
}

// =============================================================================
// Message Generation
// =============================================================================

/// Generates an EDIFACT ORDERS D.01B message for the order.
///
/// A fresh message id (UUID v4) is minted on every call and written back to
/// `order.edifact_message_id`; generating twice produces two distinct
/// messages. Aside from that write-back the function is pure.
///
/// ## Errors
/// `IncompleteOrder` when buyer, seller, or items are missing, and
/// `Validation` when the order number, currency, or a SKU is malformed -
/// see [`validate_order_completeness`].
///
/// ## Example
/// ```rust
/// use nexus_core::edifact::generate_orders_message;
/// use nexus_core::money::Money;
/// use nexus_core::order::{Order, OrderItem};
///
/// let mut order = Order::new("ORD-1", "EUR");
/// order.buyer_id = Some("B1".into());
/// order.seller_id = Some("S1".into());
/// order.items.push(OrderItem::new(1, "SKU1", 3, Money::parse("9.99").unwrap()));
///
/// let message = generate_orders_message(&mut order).unwrap();
/// assert!(message.contains("BGM+220+ORD-1+9'"));
/// assert!(order.edifact_message_id.is_some());
/// ```
pub fn generate_orders_message(order: &mut Order) -> CoreResult<String> {
    validate_order_completeness(order)?;

    // Checked non-empty above
    let buyer_id = order.buyer_id.as_deref().unwrap_or_default();
    let seller_id = order.seller_id.as_deref().unwrap_or_default();

    let message_id = Uuid::new_v4().to_string();
    let mut message = String::new();

    message.push_str(&format!("UNH+{}+ORDERS:D:01B:UN:EAN010'", message_id));
    message.push_str(&format!("BGM+220+{}+9'", order.order_number));
    message.push_str(&format!(
        "DTM+137:{}:203'",
        order.order_date.format(DTM_203_FORMAT)
    ));
    message.push_str(&format!("NAD+BY+{}'", buyer_id));
    message.push_str(&format!("NAD+SE+{}'", seller_id));

    for item in &order.items {
        message.push_str(&format!("LIN+{}+{}:EN'", item.line_number, item.sku));
        message.push_str(&format!("QTY+21:{}'", item.quantity));
        message.push_str(&format!("MOA+203:{}'", item.unit_price.to_decimal_string()));
    }

    let segment_count = order.items.len() * 3 + FIXED_SEGMENT_COUNT;
    message.push_str(&format!("UNT+{}+{}'", segment_count, message_id));

    order.edifact_message_id = Some(message_id);
    Ok(message)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::money::Money;
    use crate::order::OrderItem;

    fn complete_order() -> Order {
        let mut order = Order::new("ORD-1", "EUR");
        order.buyer_id = Some("B1".to_string());
        order.seller_id = Some("S1".to_string());
        order
            .items
            .push(OrderItem::new(1, "SKU1", 3, Money::parse("9.99").unwrap()));
        order
    }

    /// Asserts `needles` occur in `haystack` in the given order.
    fn assert_in_order(haystack: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            match haystack[from..].find(needle) {
                Some(pos) => from += pos + needle.len(),
                None => panic!("segment {:?} missing or out of order in {:?}", needle, haystack),
            }
        }
    }

    #[test]
    fn test_message_segments_in_order() {
        let mut order = complete_order();
        let message = generate_orders_message(&mut order).unwrap();

        assert_in_order(
            &message,
            &[
                "UNH+",
                "+ORDERS:D:01B:UN:EAN010'",
                "BGM+220+ORD-1+9'",
                "DTM+137:",
                ":203'",
                "NAD+BY+B1'",
                "NAD+SE+S1'",
                "LIN+1+SKU1:EN'",
                "QTY+21:3'",
                "MOA+203:9.99'",
                "UNT+8+",
            ],
        );
        assert!(message.ends_with('\''));
    }

    #[test]
    fn test_segment_count_excludes_trailer() {
        let mut order = complete_order();
        order
            .items
            .push(OrderItem::new(2, "SKU2", 1, Money::parse("5.00").unwrap()));
        order
            .items
            .push(OrderItem::new(3, "SKU3", 7, Money::parse("0.50").unwrap()));

        let message = generate_orders_message(&mut order).unwrap();

        // 3 items × 3 segments + 5 fixed = 14
        assert!(message.contains("UNT+14+"));
        // The message really does consist of count + 1 segments
        assert_eq!(message.matches('\'').count(), 15);
    }

    #[test]
    fn test_message_id_written_back_and_matches_trailer() {
        let mut order = complete_order();
        let message = generate_orders_message(&mut order).unwrap();

        let message_id = order.edifact_message_id.clone().unwrap();
        assert!(message.starts_with(&format!("UNH+{}+", message_id)));
        assert!(message.ends_with(&format!("UNT+8+{}'", message_id)));
    }

    #[test]
    fn test_regeneration_mints_new_message_id() {
        let mut order = complete_order();

        generate_orders_message(&mut order).unwrap();
        let first_id = order.edifact_message_id.clone().unwrap();

        generate_orders_message(&mut order).unwrap();
        let second_id = order.edifact_message_id.clone().unwrap();

        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_dtm_renders_order_date() {
        let mut order = complete_order();
        order.order_date = "2026-08-26T14:30:00Z".parse().unwrap();

        let message = generate_orders_message(&mut order).unwrap();
        assert!(message.contains("DTM+137:202608261430:203'"));
    }

    #[test]
    fn test_incomplete_order_missing_items() {
        let mut order = complete_order();
        order.items.clear();

        let result = generate_orders_message(&mut order);
        assert!(matches!(
            result,
            Err(CoreError::IncompleteOrder {
                missing: "line items",
                ..
            })
        ));
        assert!(order.edifact_message_id.is_none());
    }

    #[test]
    fn test_order_number_with_service_characters_is_rejected() {
        // "ORD+1'BAD" would render as BGM+220+ORD+1'BAD+9', injecting a
        // segment terminator and leaving UNT counting 8 segments while the
        // wire carries 9. Generation must refuse it outright.
        let mut order = complete_order();
        order.order_number = "ORD+1'BAD".to_string();

        let result = generate_orders_message(&mut order);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
        assert!(order.edifact_message_id.is_none());
    }

    #[test]
    fn test_overlong_order_number_is_rejected() {
        let mut order = complete_order();
        order.order_number = "A".repeat(36);

        assert!(matches!(
            generate_orders_message(&mut order),
            Err(CoreError::Validation(ValidationError::TooLong { .. }))
        ));
    }

    #[test]
    fn test_malformed_currency_is_rejected() {
        let mut order = complete_order();
        order.currency = "eur".to_string();

        assert!(matches!(
            generate_orders_message(&mut order),
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_sku_with_service_characters_is_rejected() {
        let mut order = complete_order();
        order
            .items
            .push(OrderItem::new(2, "SKU:2'", 1, Money::parse("1.00").unwrap()));

        assert!(matches!(
            generate_orders_message(&mut order),
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
        assert!(order.edifact_message_id.is_none());
    }

    #[test]
    fn test_incomplete_order_missing_parties() {
        let mut order = complete_order();
        order.buyer_id = None;
        assert!(matches!(
            generate_orders_message(&mut order),
            Err(CoreError::IncompleteOrder { missing: "buyer id", .. })
        ));

        let mut order = complete_order();
        order.seller_id = Some(String::new());
        assert!(matches!(
            generate_orders_message(&mut order),
            Err(CoreError::IncompleteOrder { missing: "seller id", .. })
        ));
    }
}
