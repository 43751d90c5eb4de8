//! # Order Total Calculation
//!
//! Deterministic recomputation of an order's monetary fields from its line
//! items, with the two external pricing concerns injected as collaborators.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     calculate_totals(order)                             │
//! │                                                                         │
//! │  items ──► subtotal = Σ (unit_price × quantity)                        │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  shipping_address.country_code ──► TaxRateResolver ──► rate (bps)      │
//! │                │                   (no address → tax = 0)              │
//! │                ▼                                                        │
//! │  tax = subtotal × rate                                                  │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  shipping = ShippingCostPolicy(order)                                  │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  total = subtotal + tax + shipping       (the order invariant)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calculation is synchronous and single-threaded over one order; the caller
//! owns the order mutably, so no internal locking is needed.

use crate::error::CoreResult;
use crate::money::{Money, TaxRate};
use crate::order::{Order, OrderItem};
use crate::validation;
use crate::{CoreError, MAX_ORDER_ITEMS};
use std::collections::HashMap;

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Resolves the applicable tax rate for a shipping country.
///
/// Pluggable because tax rules live outside the order core (per-tenant
/// configuration, external tax services). Unknown countries must resolve
/// to a zero rate, never an error.
pub trait TaxRateResolver {
    /// Returns the tax rate for an ISO 3166-1 alpha-2 country code.
    fn rate_for(&self, country_code: &str) -> TaxRate;
}

/// Computes the shipping cost for an order.
///
/// Pluggable for the same reason: carrier pricing is a platform concern,
/// not order math.
pub trait ShippingCostPolicy {
    /// Returns the shipping cost to charge on this order.
    fn shipping_cost(&self, order: &Order) -> Money;
}

// =============================================================================
// Provided Implementations
// =============================================================================

/// Country → tax rate table with a zero default.
#[derive(Debug, Clone, Default)]
pub struct FixedTaxRates {
    rates: HashMap<String, TaxRate>,
}

impl FixedTaxRates {
    /// Creates an empty table; every country resolves to zero tax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rate for a country (builder style).
    pub fn with_rate(mut self, country_code: impl Into<String>, bps: u32) -> Self {
        self.rates.insert(country_code.into(), TaxRate::from_bps(bps));
        self
    }
}

impl TaxRateResolver for FixedTaxRates {
    fn rate_for(&self, country_code: &str) -> TaxRate {
        self.rates.get(country_code).copied().unwrap_or_default()
    }
}

/// Zero-cost shipping.
///
/// The platform has not shipped a real carrier-pricing policy yet; this is
/// the placeholder in effect everywhere. Swap in a real policy through the
/// calculator constructor when one exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeShipping;

impl ShippingCostPolicy for FreeShipping {
    fn shipping_cost(&self, _order: &Order) -> Money {
        Money::zero()
    }
}

// =============================================================================
// Order Calculator
// =============================================================================

/// Recomputes order monetary fields; the only writer of
/// subtotal/tax/shipping/total.
#[derive(Debug, Clone)]
pub struct OrderCalculator<T: TaxRateResolver, S: ShippingCostPolicy> {
    tax_rates: T,
    shipping_policy: S,
}

impl OrderCalculator<FixedTaxRates, FreeShipping> {
    /// Calculator with an empty tax table and free shipping.
    pub fn with_defaults() -> Self {
        OrderCalculator::new(FixedTaxRates::new(), FreeShipping)
    }
}

impl<T: TaxRateResolver, S: ShippingCostPolicy> OrderCalculator<T, S> {
    /// Creates a calculator from injected collaborators.
    pub fn new(tax_rates: T, shipping_policy: S) -> Self {
        OrderCalculator {
            tax_rates,
            shipping_policy,
        }
    }

    /// Recomputes subtotal, tax, shipping, and total from the item list.
    ///
    /// Tax applies only when a shipping address with a country code is
    /// present; otherwise it is zero. Total is always the sum of the other
    /// three fields.
    pub fn calculate_totals(&self, order: &mut Order) {
        let subtotal = order
            .items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.line_total());

        let tax = match order
            .shipping_address
            .as_ref()
            .and_then(|address| address.country_code())
        {
            Some(country) => subtotal.apply_rate(self.tax_rates.rate_for(country)),
            None => Money::zero(),
        };

        let shipping = self.shipping_policy.shipping_cost(order);

        order.subtotal = subtotal;
        order.tax = tax;
        order.shipping = shipping;
        order.total = subtotal + tax + shipping;
    }

    /// Validates and appends an item, then recomputes all totals.
    ///
    /// ## Errors
    /// - Quantity of zero or SKU failing format rules → validation error
    /// - Order already at MAX_ORDER_ITEMS → `OrderTooLarge`
    pub fn add_item(&self, order: &mut Order, item: OrderItem) -> CoreResult<()> {
        validation::validate_quantity(item.quantity)?;
        validation::validate_sku(&item.sku)?;

        if order.items.len() >= MAX_ORDER_ITEMS {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_ITEMS,
            });
        }

        order.items.push(item);
        self.calculate_totals(order);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Address;

    fn item(line: u32, qty: u32, price: &str) -> OrderItem {
        OrderItem::new(line, format!("SKU{}", line), qty, Money::parse(price).unwrap())
    }

    #[test]
    fn test_totals_without_shipping_address() {
        // Reference case: [(qty=2, price=10.00), (qty=1, price=5.00)], no address
        let calculator = OrderCalculator::with_defaults();
        let mut order = Order::new("ORD-1", "EUR");
        order.items.push(item(1, 2, "10.00"));
        order.items.push(item(2, 1, "5.00"));

        calculator.calculate_totals(&mut order);

        assert_eq!(order.subtotal, Money::parse("25.00").unwrap());
        assert_eq!(order.tax, Money::zero());
        assert_eq!(order.shipping, Money::zero());
        assert_eq!(order.total, Money::parse("25.00").unwrap());
    }

    #[test]
    fn test_totals_with_taxed_country() {
        let calculator = OrderCalculator::new(
            FixedTaxRates::new().with_rate("DE", 1900), // 19% VAT
            FreeShipping,
        );
        let mut order = Order::new("ORD-1", "EUR");
        order.shipping_address = Some(Address {
            country_code: Some("DE".to_string()),
            ..Address::default()
        });
        order.items.push(item(1, 1, "100.00"));

        calculator.calculate_totals(&mut order);

        assert_eq!(order.subtotal, Money::parse("100.00").unwrap());
        assert_eq!(order.tax, Money::parse("19.00").unwrap());
        assert_eq!(order.total, Money::parse("119.00").unwrap());
    }

    #[test]
    fn test_unknown_country_resolves_to_zero_tax() {
        let calculator = OrderCalculator::new(
            FixedTaxRates::new().with_rate("DE", 1900),
            FreeShipping,
        );
        let mut order = Order::new("ORD-1", "EUR");
        order.shipping_address = Some(Address {
            country_code: Some("XX".to_string()),
            ..Address::default()
        });
        order.items.push(item(1, 1, "100.00"));

        calculator.calculate_totals(&mut order);
        assert_eq!(order.tax, Money::zero());
    }

    #[test]
    fn test_add_item_appends_and_recalculates() {
        let calculator = OrderCalculator::with_defaults();
        let mut order = Order::new("ORD-1", "EUR");
        assert!(order.is_empty());

        calculator
            .add_item(&mut order, item(1, 3, "9.99"))
            .unwrap();

        assert_eq!(order.item_count(), 1);
        assert_eq!(order.subtotal, Money::parse("29.97").unwrap());
        assert_eq!(order.total, Money::parse("29.97").unwrap());
    }

    #[test]
    fn test_add_item_rejects_zero_quantity() {
        let calculator = OrderCalculator::with_defaults();
        let mut order = Order::new("ORD-1", "EUR");

        let result = calculator.add_item(&mut order, item(1, 0, "9.99"));
        assert!(result.is_err());
        assert!(order.is_empty());
        assert!(order.total.is_zero());
    }

    #[test]
    fn test_add_item_rejects_overfull_order() {
        let calculator = OrderCalculator::with_defaults();
        let mut order = Order::new("ORD-1", "EUR");
        for line in 1..=MAX_ORDER_ITEMS as u32 {
            order.items.push(item(line, 1, "1.00"));
        }

        let result = calculator.add_item(&mut order, item(9999, 1, "1.00"));
        assert!(matches!(result, Err(CoreError::OrderTooLarge { .. })));
    }

    #[test]
    fn test_total_invariant_holds_after_recalculation() {
        let calculator = OrderCalculator::new(
            FixedTaxRates::new().with_rate("US", 825),
            FreeShipping,
        );
        let mut order = Order::new("ORD-1", "USD");
        order.shipping_address = Some(Address {
            country_code: Some("US".to_string()),
            ..Address::default()
        });

        for line in 1..=5 {
            calculator
                .add_item(&mut order, item(line, line, "3.33"))
                .unwrap();
            assert_eq!(order.total, order.subtotal + order.tax + order.shipping);
        }
    }
}
