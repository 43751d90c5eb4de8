//! # nexus-core: Pure Business Logic for the Nexus Trade Platform
//!
//! This crate is the **heart** of the Nexus order domain. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Nexus Order Processing                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Platform Services (out of this repo)               │   │
//! │  │    REST controllers ── persistence ── messaging ── UI          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nexus-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   order   │  │  totals   │  │  edifact  │  │   │
//! │  │   │   Money   │  │   Order   │  │ calculator│  │  ORDERS   │  │   │
//! │  │   │  TaxRate  │  │ OrderItem │  │  traits   │  │  D.01B    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │    gs1    │  │ validation│                                 │   │
//! │  │   │ GTIN/GLN/ │  │   rules   │                                 │   │
//! │  │   │   SSCC    │  │  checks   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                nexus-registry (GS1 lookup client)               │   │
//! │  │          HTTP lookups, TTL cache, retry, metrics                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - Order aggregate (Order, OrderItem, statuses, Address)
//! - [`money`] - Money type with integer arithmetic at scale 4 (no floats!)
//! - [`totals`] - Order total calculation with injected tax/shipping policies
//! - [`edifact`] - EDIFACT ORDERS D.01B message generation
//! - [`gs1`] - GS1 Mod-10 check-digit validation (GTIN/GLN/SSCC)
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//!    (the one exception: freshly minted UUIDs for ids)
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are i64 units at scale 4
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use nexus_core::money::Money;
//! use nexus_core::order::{Order, OrderItem};
//! use nexus_core::totals::OrderCalculator;
//!
//! let calculator = OrderCalculator::with_defaults();
//! let mut order = Order::new("ORD-1", "EUR");
//!
//! let item = OrderItem::new(1, "SKU1", 2, Money::parse("10.00").unwrap());
//! calculator.add_item(&mut order, item).unwrap();
//!
//! assert_eq!(order.total, Money::parse("20.00").unwrap());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod edifact;
pub mod error;
pub mod gs1;
pub mod money;
pub mod order;
pub mod totals;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use nexus_core::Money` instead of
// `use nexus_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use order::{Address, Order, OrderItem, OrderStatus, PaymentStatus};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed on a single order
///
/// ## Business Reason
/// Keeps EDIFACT messages and recalculation passes bounded; partner EDI
/// gateways reject oversized interchanges well before this point.
pub const MAX_ORDER_ITEMS: usize = 500;

/// Maximum quantity of a single line item
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g. typing 100000 instead of 100).
pub const MAX_ITEM_QUANTITY: u32 = 99_999;

/// Maximum order number length (EDIFACT BGM document number limit)
pub const MAX_ORDER_NUMBER_LEN: usize = 35;

/// Maximum SKU length
pub const MAX_SKU_LEN: usize = 50;
