//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber: compact output,
//! no module targets (the actor loop logs an `entity_type` field instead).
//!
//! The filter comes from `RUST_LOG` when set, otherwise from `logging.filter`
//! in the configuration.
//!
//! ```bash
//! RUST_LOG=info cargo run                      # lifecycle, creates, placed orders
//! RUST_LOG=debug cargo run                     # request payloads and order pricing
//! RUST_LOG=web_pos=debug,tower_http=debug cargo run
//! ```
//!
//! A placed order at `debug` reads roughly:
//!
//! ```text
//! DEBUG place_order{customer_id=CUSTOMER-1f.. lines=2}: place_order called params=OrderCreate { .. }
//! DEBUG Create entity_type="Order" params=OrderCreate { .. }
//! DEBUG Placing order order_id=ORDER-9a.. customer_id=CUSTOMER-1f..
//! DEBUG Get entity_type="Customer" id=CUSTOMER-1f.. found=true
//! DEBUG Order priced subtotal=250.0 discount_amount=25.0 total=225.0 balance=75.0
//!  INFO Action ok entity_type="Item" id=ITEM-3c..
//!  INFO Order placed order_id=ORDER-9a.. total=225.0 lines=2
//!  INFO Created entity_type="Order" id=ORDER-9a.. size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_filter` applies when `RUST_LOG` is unset or invalid.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
