use crate::customer_actor::{CustomerAction, CustomerActionResult, CustomerError};
use crate::model::{Customer, CustomerCreate, CustomerUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            other => other
                .into_entity_error::<CustomerError>()
                .unwrap_or_else(|e| CustomerError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CustomerClient {
    /// Registers a customer and returns the generated `CUSTOMER-...` id.
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<String, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: String,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Like `get`, but a missing customer is an error.
    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: String) -> Result<Customer, CustomerError> {
        self.get(id.clone())
            .await?
            .ok_or(CustomerError::NotFound(id))
    }

    /// Links a placed order to the customer. Returns the customer's order count.
    #[instrument(skip(self))]
    pub async fn attach_order(&self, id: String, order_id: String) -> Result<usize, CustomerError> {
        debug!("Attaching order");
        match self
            .inner
            .perform_action(id, CustomerAction::AttachOrder(order_id))
            .await
        {
            Ok(CustomerActionResult::AttachOrder(count)) => Ok(count),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
