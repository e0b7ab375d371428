//! [`ActorEntity`] implementation for [`Customer`].

use super::actions::{CustomerAction, CustomerActionResult};
use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use crate::validation;
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn check_fields(
    name: &str,
    address: &str,
    mobile: &str,
    profile_pic: &str,
) -> Result<(), CustomerError> {
    validation::validate_name(name)
        .and_then(|_| validation::validate_mobile(mobile))
        .and_then(|_| validation::validate_address(address))
        .and_then(|_| validation::validate_profile_pic(profile_pic))
        .map_err(|msg| CustomerError::Validation(msg.to_string()))
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = String;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: String, params: CustomerCreate) -> Result<Self, CustomerError> {
        check_fields(
            &params.name,
            &params.address,
            &params.mobile,
            &params.profile_pic,
        )?;
        Ok(Customer::new(id, params))
    }

    /// Overwrites name, address, mobile and picture. Attached orders are kept.
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        check_fields(
            &update.name,
            &update.address,
            &update.mobile,
            &update.profile_pic,
        )?;
        self.name = update.name;
        self.address = update.address;
        self.mobile = update.mobile;
        self.profile_pic = update.profile_pic;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), CustomerError> {
        if !self.orders.is_empty() {
            return Err(CustomerError::HasOrders {
                id: self.id.clone(),
                count: self.orders.len(),
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &(),
    ) -> Result<CustomerActionResult, CustomerError> {
        match action {
            CustomerAction::AttachOrder(order_id) => {
                if !self.orders.contains(&order_id) {
                    self.orders.push(order_id);
                }
                Ok(CustomerActionResult::AttachOrder(self.orders.len()))
            }
        }
    }
}
