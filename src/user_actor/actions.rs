use crate::domain::{Role, User};

#[derive(Debug, Clone)]
pub enum UserAction {
    /// Marks a customer as waiting for seller approval.
    RequestSeller,
    /// Administrative role change; clears any pending request.
    SetRole(Role),
}

#[derive(Debug, Clone)]
pub enum UserActionResult {
    SellerRequested(User),
    AlreadyRequested,
    RoleChanged(User),
}
