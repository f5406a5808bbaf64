use serde::Serialize;
use uuid::Uuid;

use crate::{AppError, AppResult};

/// Authenticated principal attached to a request by the authentication layer.
///
/// Values only exist for real principals: the nil identifier is rejected at
/// construction, so a handler holding a `CallerIdentity` never acts on behalf
/// of a zero-value caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CallerIdentity {
    id: Uuid,
    customer_id: Uuid,
}

impl CallerIdentity {
    /// Creates an identity for the given principal and tenant.
    pub fn new(id: Uuid, customer_id: Uuid) -> AppResult<Self> {
        if id.is_nil() {
            return Err(AppError::Unauthorized(
                "caller identity must not be the nil identifier".to_owned(),
            ));
        }

        Ok(Self { id, customer_id })
    }

    /// Returns the principal identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the tenant the principal belongs to.
    #[must_use]
    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::CallerIdentity;

    #[test]
    fn rejects_nil_principal() {
        let result = CallerIdentity::new(Uuid::nil(), Uuid::new_v4());
        assert!(result.is_err());
    }

    #[test]
    fn keeps_principal_and_tenant() {
        let id = Uuid::new_v4();
        let customer_id = Uuid::new_v4();
        let identity = CallerIdentity::new(id, customer_id);

        assert!(identity.is_ok_and(|identity| {
            identity.id() == id && identity.customer_id() == customer_id
        }));
    }
}
