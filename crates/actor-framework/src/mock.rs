//! # Mock Clients
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of scripted expectations instead of a store. Use it
//! to test an actor whose `Context` holds other clients (the order actor
//! reading customers and reserving stock) without running those actors.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, only scripted answers | real store |
//! | Error injection | `return_err(...)` | needs a matching state |
//! | Use for | logic *around* a client | the actor itself, full flows |
//!
//! Expectations are consumed strictly in order. A request that doesn't match
//! the next expectation (wrong verb or wrong id) panics inside the mock task;
//! the caller then sees [`FrameworkError::ActorDropped`].
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Drawer { id: String, cash: f64 }
//! #[derive(Debug)] struct DrawerCreate;
//! #[derive(Debug)] struct DrawerUpdate;
//! #[derive(Debug)] enum DrawerAction { Count }
//! #[derive(Debug, thiserror::Error)] #[error("drawer error")] struct DrawerError;
//!
//! #[async_trait]
//! impl ActorEntity for Drawer {
//!     type Id = String; type Create = DrawerCreate; type Update = DrawerUpdate;
//!     type Action = DrawerAction; type ActionResult = f64; type Context = (); type Error = DrawerError;
//!     fn from_create_params(id: String, _: DrawerCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, cash: 0.0 })
//!     }
//!     async fn on_update(&mut self, _: DrawerUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: DrawerAction, _: &()) -> Result<f64, Self::Error> { Ok(self.cash) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Drawer>::new();
//!     mock.expect_action("DRAWER-1".to_string()).return_ok(120.0);
//!     mock.expect_get("DRAWER-2".to_string()).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let counted = client.perform_action("DRAWER-1".to_string(), DrawerAction::Count).await;
//!     assert_eq!(counted.unwrap(), 120.0);
//!     let missing = client.get("DRAWER-2".to_string()).await;
//!     assert!(matches!(missing, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! For tests that want to inspect the raw request payloads, [`create_mock_client`]
//! returns the client together with the request receiver; [`expect_create`],
//! [`expect_get`] and [`expect_action`] pull the next request off it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .expect("mock expectation queue poisoned")
        .push_back(expectation);
}

/// A client backed by scripted answers.
///
/// Must be created inside a tokio runtime: the answering task is spawned in `new`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response })) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (_, None) => panic!("Unexpected request: no expectations left"),
                    _ => panic!("Request does not match the next expectation"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Action { id, response })
    }

    /// Panics if any scripted expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with the answer the mock should give.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    pub fn return_ok(self, value: R) {
        push(&self.expectations, (self.make)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, (self.make)(Err(error)));
    }
}

/// Creates a client plus the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Coupon {
        id: String,
        percent: f64,
    }

    #[derive(Debug)]
    struct CouponCreate {
        percent: f64,
    }

    #[derive(Debug)]
    struct CouponUpdate;

    #[derive(Debug)]
    enum CouponAction {
        Redeem,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("coupon error")]
    struct CouponError;

    #[async_trait]
    impl ActorEntity for Coupon {
        type Id = String;
        type Create = CouponCreate;
        type Update = CouponUpdate;
        type Action = CouponAction;
        type ActionResult = bool;
        type Context = ();
        type Error = CouponError;

        fn from_create_params(id: String, params: CouponCreate) -> Result<Self, CouponError> {
            Ok(Self {
                id,
                percent: params.percent,
            })
        }

        async fn on_update(&mut self, _: CouponUpdate, _: &()) -> Result<(), CouponError> {
            Ok(())
        }

        async fn handle_action(&mut self, _: CouponAction, _: &()) -> Result<bool, CouponError> {
            Ok(true)
        }
    }

    fn coupon(id: &str, percent: f64) -> Coupon {
        Coupon {
            id: id.to_string(),
            percent,
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_create_payload() {
        let (client, mut receiver) = create_mock_client::<Coupon>(4);

        let create_task = tokio::spawn(async move { client.create(CouponCreate { percent: 15.0 }).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.percent, 15.0);
        responder.send(Ok("COUPON-1".to_string())).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), "COUPON-1");
    }

    #[tokio::test]
    async fn test_scripted_answers_in_order() {
        let mut mock = MockClient::<Coupon>::new();
        mock.expect_create().return_ok("COUPON-1".to_string());
        mock.expect_get("COUPON-1".to_string())
            .return_ok(Some(coupon("COUPON-1", 10.0)));
        mock.expect_list().return_ok(vec![coupon("COUPON-1", 10.0)]);
        mock.expect_action("COUPON-1".to_string()).return_ok(true);
        mock.expect_delete("COUPON-1".to_string())
            .return_err(FrameworkError::NotFound("COUPON-1".to_string()));

        let client = mock.client();
        let id = client.create(CouponCreate { percent: 10.0 }).await.unwrap();
        assert_eq!(client.get(id.clone()).await.unwrap().unwrap().percent, 10.0);
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert!(client.perform_action(id.clone(), CouponAction::Redeem).await.unwrap());
        assert!(matches!(
            client.delete(id).await,
            Err(FrameworkError::NotFound(_))
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_id_drops_the_response() {
        let mut mock = MockClient::<Coupon>::new();
        mock.expect_update("COUPON-1".to_string())
            .return_ok(coupon("COUPON-1", 5.0));

        let result = mock
            .client()
            .update("COUPON-2".to_string(), CouponUpdate)
            .await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Coupon>::new();
        mock.expect_list().return_ok(Vec::new());
        mock.verify();
    }
}
