use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Placement logic (customer lookup, stock checks, pricing, reservation)
/// happens in the Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it as stored.
    #[instrument(skip(self, params), fields(customer_id = %params.customer_id, lines = params.order_details.len()))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place_order called");
        info!("Sending place_order to actor");

        let order_id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get_order(order_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: String) -> Result<Order, OrderError> {
        self.get(order_id.clone())
            .await?
            .ok_or(OrderError::NotFound(order_id))
    }

    /// Every placed order, oldest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
