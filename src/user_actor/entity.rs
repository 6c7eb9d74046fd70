use crate::actor_framework::Entity;
use crate::domain::{Role, User, UserCreate, UserStatus};
use super::actions::{UserAction, UserActionResult};

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    type Patch = (); // Profile data is set once, on first sight
    type Action = UserAction;
    type ActionResult = UserActionResult;

    fn id(&self) -> &String { &self.email }

    /// Creates a new User keyed by `email`, always as a customer.
    fn from_create(email: String, payload: UserCreate) -> Result<Self, String> {
        if email.trim().is_empty() {
            return Err("Email required".to_string());
        }
        Ok(Self {
            email,
            name: payload.name,
            image: payload.image,
            role: Role::Customer,
            status: None,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Err("Users change only through role actions".to_string())
    }

    fn handle_action(&mut self, action: UserAction) -> Result<UserActionResult, String> {
        match action {
            UserAction::RequestSeller => {
                if self.status == Some(UserStatus::Requested) {
                    return Ok(UserActionResult::AlreadyRequested);
                }
                self.status = Some(UserStatus::Requested);
                Ok(UserActionResult::SellerRequested(self.clone()))
            }
            UserAction::SetRole(role) => {
                self.role = role;
                self.status = None;
                Ok(UserActionResult::RoleChanged(self.clone()))
            }
        }
    }
}
