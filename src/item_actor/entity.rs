//! [`ActorEntity`] implementation for [`Item`].

use super::actions::{ItemAction, ItemActionResult};
use super::error::ItemError;
use crate::model::{Item, ItemCreate, ItemUpdate};
use crate::validation;
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn check_fields(description: &str, price: f64) -> Result<(), ItemError> {
    validation::validate_description(description)
        .and_then(|_| validation::validate_price(price))
        .map_err(|msg| ItemError::Validation(msg.to_string()))
}

#[async_trait]
impl ActorEntity for Item {
    type Id = String;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = ItemAction;
    type ActionResult = ItemActionResult;
    type Context = ();
    type Error = ItemError;

    fn from_create_params(code: String, params: ItemCreate) -> Result<Self, ItemError> {
        check_fields(&params.description, params.price)?;
        Ok(Item::new(code, params))
    }

    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), ItemError> {
        check_fields(&update.description, update.price)?;
        self.description = update.description;
        self.price = update.price;
        self.qty = update.qty;
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: current stock on hand
    /// - `ReserveStock`: deducts stock if enough is on hand
    /// - `ReleaseStock`: adds stock back, saturating at `u32::MAX`
    async fn handle_action(
        &mut self,
        action: ItemAction,
        _ctx: &(),
    ) -> Result<ItemActionResult, ItemError> {
        match action {
            ItemAction::CheckStock => Ok(ItemActionResult::CheckStock(self.qty)),
            ItemAction::ReserveStock(quantity) => {
                if quantity > self.qty {
                    return Err(ItemError::InsufficientStock {
                        code: self.code.clone(),
                        requested: quantity,
                        available: self.qty,
                    });
                }
                self.qty -= quantity;
                Ok(ItemActionResult::ReserveStock(self.qty))
            }
            ItemAction::ReleaseStock(quantity) => {
                self.qty = self.qty.saturating_add(quantity);
                Ok(ItemActionResult::ReleaseStock(self.qty))
            }
        }
    }
}
