//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test holds, so the test plays the actor:
/// it inspects each request and answers with success, failure or nothing at all.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreatePayload, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::UserClient;
    use crate::domain::{Role, User};
    use crate::user_actor::{UserAction, UserActionResult, UserError};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.get_user("test@example.com".to_string()).await });

        let (email, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(email, "test@example.com");
        responder.send(Ok(Some(User::new("test@example.com", "Test")))).unwrap();

        let user = task.await.unwrap().unwrap().unwrap();
        assert_eq!(user.role, Role::Customer);
    }

    #[tokio::test]
    async fn test_duplicate_request_maps_to_domain_error() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.request_seller("ana@example.com".to_string()).await });

        let (_, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert!(matches!(action, UserAction::RequestSeller));
        responder.send(Ok(UserActionResult::AlreadyRequested)).unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(UserError::AlreadyRequested("ana@example.com".to_string())));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.get_role("ana@example.com".to_string()).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(UserError::ActorCommunicationError(_))));
    }
}
