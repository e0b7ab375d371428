use crate::item_actor::{ItemAction, ItemActionResult, ItemError};
use crate::model::{Item, ItemCreate, ItemUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Item actor.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
}

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Item> for ItemClient {
    type Error = ItemError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(code) => ItemError::NotFound(code),
            other => other
                .into_entity_error::<ItemError>()
                .unwrap_or_else(|e| ItemError::ActorCommunicationError(e.to_string())),
        }
    }
}

fn unexpected(result: ItemActionResult) -> ItemError {
    ItemError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}

impl ItemClient {
    /// Adds an item and returns the generated `ITEM-...` code.
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: ItemCreate) -> Result<String, ItemError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(&self, code: String, update: ItemUpdate) -> Result<Item, ItemError> {
        debug!("Sending request");
        self.inner.update(code, update).await.map_err(Self::map_error)
    }

    /// Like `get`, but a missing item is an error.
    #[instrument(skip(self))]
    pub async fn get_item(&self, code: String) -> Result<Item, ItemError> {
        self.get(code.clone())
            .await?
            .ok_or(ItemError::NotFound(code))
    }

    /// Current stock on hand.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, code: String) -> Result<u32, ItemError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(code, ItemAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ItemActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Deducts `quantity`; returns the stock left.
    ///
    /// Fails with [`ItemError::InsufficientStock`] and leaves stock unchanged
    /// when fewer than `quantity` units are on hand.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, code: String, quantity: u32) -> Result<u32, ItemError> {
        debug!("Reserving stock");
        match self
            .inner
            .perform_action(code, ItemAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ItemActionResult::ReserveStock(left) => Ok(left),
            other => Err(unexpected(other)),
        }
    }

    /// Returns `quantity` units to stock; returns the new stock level.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, code: String, quantity: u32) -> Result<u32, ItemError> {
        debug!("Releasing stock");
        match self
            .inner
            .perform_action(code, ItemAction::ReleaseStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ItemActionResult::ReleaseStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }
}
