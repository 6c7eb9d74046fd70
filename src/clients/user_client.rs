use tracing::{debug, info, instrument, warn};
use crate::domain::{Role, User, UserCreate};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use crate::actor_framework::ResourceClient;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

crate::impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    /// Finds the user for `email`, creating a customer account on first sight.
    ///
    /// Returns the stored user and whether it was created by this call.
    #[instrument(skip(self, profile))]
    pub async fn ensure_user(&self, email: String, profile: UserCreate) -> Result<(User, bool), UserError> {
        debug!("Sending request");
        let (user, created) = self.inner.get_or_create(email, profile).await?;
        if created {
            info!(role = ?user.role, "User created");
        }
        Ok((user, created))
    }

    #[instrument(skip(self))]
    pub async fn get_role(&self, email: String) -> Result<Role, UserError> {
        debug!("Sending request");
        match self.inner.get(email.clone()).await? {
            Some(user) => Ok(user.role),
            None => Err(UserError::NotFound(email)),
        }
    }

    /// Records a customer's request to become a seller.
    ///
    /// # Errors
    /// [`UserError::AlreadyRequested`] when a request is already pending.
    #[instrument(skip(self))]
    pub async fn request_seller(&self, email: String) -> Result<User, UserError> {
        debug!("Sending request");
        match self.inner.perform_action(email.clone(), UserAction::RequestSeller).await? {
            UserActionResult::SellerRequested(user) => {
                info!("Seller request recorded");
                Ok(user)
            }
            UserActionResult::AlreadyRequested => {
                warn!("Duplicate seller request");
                Err(UserError::AlreadyRequested(email))
            }
            other => Err(UserError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_role(&self, email: String, role: Role) -> Result<User, UserError> {
        debug!("Sending request");
        match self.inner.perform_action(email, UserAction::SetRole(role)).await? {
            UserActionResult::RoleChanged(user) => {
                info!(role = ?user.role, "Role changed");
                Ok(user)
            }
            other => Err(UserError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }
}
