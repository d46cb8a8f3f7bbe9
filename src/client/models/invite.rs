//! Invite code models

use serde::{Deserialize, Serialize};

/// Response of `/admin/invite`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteResponse {
    /// Newly issued invite code
    pub code: String,
}
