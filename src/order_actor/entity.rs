//! [`ActorEntity`] implementation for [`Order`].
//!
//! Placing an order is the `on_create` hook: it runs inside the order actor's
//! loop with the customer and item clients as context, so placements are
//! serialized with each other.

use super::error::OrderError;
use super::pricing::{self, PricedLine};
use crate::clients::{CustomerClient, ItemClient};
use crate::customer_actor::CustomerError;
use crate::item_actor::ItemError;
use crate::model::{Order, OrderCreate, OrderDetail};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::{debug, info, warn};

/// Clients the order workflow reads from and reserves against.
pub type OrderContext = (CustomerClient, ItemClient);

fn invalid(msg: impl Into<String>) -> OrderError {
    OrderError::InvalidOrder(msg.into())
}

fn check_shape(params: &OrderCreate) -> Result<(), OrderError> {
    if params.customer_id.is_empty() {
        return Err(invalid("Customer ID is required"));
    }
    if params.order_details.is_empty() {
        return Err(invalid("Order must contain at least one item"));
    }
    for line in &params.order_details {
        if line.item_code.is_empty() {
            return Err(invalid("Item code is required"));
        }
        if line.quantity == 0 {
            return Err(invalid(format!(
                "Quantity must be at least 1 for item {}",
                line.item_code
            )));
        }
    }
    if !params.discount.is_finite() || !(0.0..=100.0).contains(&params.discount) {
        return Err(invalid("Discount must be between 0 and 100"));
    }
    if !params.cash.is_finite() || params.cash < 0.0 {
        return Err(invalid("Cash must be a non-negative number"));
    }
    Ok(())
}

/// Adds `quantity` to the running total for `code`; returns the new total.
fn add_requested(requested: &mut Vec<(String, u32)>, code: &str, quantity: u32) -> u32 {
    match requested.iter_mut().find(|(c, _)| c == code) {
        Some((_, total)) => {
            *total = total.saturating_add(quantity);
            *total
        }
        None => {
            requested.push((code.to_string(), quantity));
            quantity
        }
    }
}

/// Puts back stock reserved by a placement that failed later on.
async fn release_all(items: &ItemClient, reserved: &[(String, u32)]) {
    for (code, quantity) in reserved {
        if let Err(e) = items.release_stock(code.clone(), *quantity).await {
            warn!(item_code = %code, quantity, error = %e, "Failed to release reserved stock");
        }
    }
}

fn from_customer_error(customer_id: &str, e: CustomerError) -> OrderError {
    match e {
        CustomerError::NotFound(_) => OrderError::CustomerNotFound(customer_id.to_string()),
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}

fn from_item_error(code: &str, e: ItemError) -> OrderError {
    match e {
        ItemError::NotFound(_) => OrderError::ItemNotFound(code.to_string()),
        ItemError::InsufficientStock {
            code,
            requested,
            available,
        } => OrderError::InsufficientStock {
            code,
            requested,
            available,
        },
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    /// Checks the request shape and lays out unpriced detail rows.
    fn from_create_params(order_id: String, params: OrderCreate) -> Result<Self, OrderError> {
        check_shape(&params)?;

        let order_details = params
            .order_details
            .into_iter()
            .map(|line| OrderDetail {
                item_code: line.item_code,
                description: String::new(),
                quantity: line.quantity,
                unit_price: 0.0,
                total_price: 0.0,
            })
            .collect();

        Ok(Self {
            order_id,
            customer_id: params.customer_id,
            order_details,
            subtotal: 0.0,
            discount: params.discount,
            discount_amount: 0.0,
            total: 0.0,
            cash: params.cash,
            balance: 0.0,
        })
    }

    /// Places the order.
    ///
    /// 1. the customer must exist
    /// 2. every item must exist and cover the quantity requested across all lines
    /// 3. [`pricing::quote`] computes the figures and checks the cash
    /// 4. stock is reserved item by item; a failed reservation releases the earlier ones
    /// 5. the order is attached to the customer
    ///
    /// Any error leaves stock as it was and the order is not stored.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let (customers, items) = ctx;
        debug!(order_id = %self.order_id, customer_id = %self.customer_id, "Placing order");

        match customers.get(self.customer_id.clone()).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(OrderError::CustomerNotFound(self.customer_id.clone())),
            Err(e) => return Err(from_customer_error(&self.customer_id, e)),
        }

        let mut requested: Vec<(String, u32)> = Vec::new();
        let mut priced = Vec::with_capacity(self.order_details.len());
        for detail in &mut self.order_details {
            let item = match items.get(detail.item_code.clone()).await {
                Ok(Some(item)) => item,
                Ok(None) => return Err(OrderError::ItemNotFound(detail.item_code.clone())),
                Err(e) => return Err(from_item_error(&detail.item_code, e)),
            };

            let wanted = add_requested(&mut requested, &item.code, detail.quantity);
            if wanted > item.qty {
                warn!(item_code = %item.code, requested = wanted, available = item.qty, "Insufficient stock");
                return Err(OrderError::InsufficientStock {
                    code: item.code,
                    requested: wanted,
                    available: item.qty,
                });
            }

            detail.description = item.description;
            detail.unit_price = item.price;
            priced.push(PricedLine {
                quantity: detail.quantity,
                unit_price: item.price,
            });
        }

        let quote = pricing::quote(&priced, self.discount, self.cash)?;
        debug!(
            subtotal = quote.subtotal,
            discount_amount = quote.discount_amount,
            total = quote.total,
            balance = quote.balance,
            "Order priced"
        );

        let mut reserved: Vec<(String, u32)> = Vec::with_capacity(requested.len());
        for (code, quantity) in &requested {
            if let Err(e) = items.reserve_stock(code.clone(), *quantity).await {
                warn!(item_code = %code, error = %e, "Reservation failed, releasing earlier reservations");
                release_all(items, &reserved).await;
                return Err(from_item_error(code, e));
            }
            reserved.push((code.clone(), *quantity));
        }

        if let Err(e) = customers
            .attach_order(self.customer_id.clone(), self.order_id.clone())
            .await
        {
            warn!(customer_id = %self.customer_id, error = %e, "Attaching order failed, releasing stock");
            release_all(items, &reserved).await;
            return Err(from_customer_error(&self.customer_id, e));
        }

        for (detail, total) in self.order_details.iter_mut().zip(&quote.line_totals) {
            detail.total_price = *total;
        }
        self.subtotal = quote.subtotal;
        self.discount_amount = quote.discount_amount;
        self.total = quote.total;
        self.balance = quote.balance;

        info!(order_id = %self.order_id, total = self.total, lines = self.order_details.len(), "Order placed");
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderContext) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        match action {}
    }
}
