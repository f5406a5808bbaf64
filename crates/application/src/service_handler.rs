use std::sync::Arc;

use crate::{
    AccesskeyService, ActiveflowService, AuthService, BillingService, CallService,
    ContactService, FlowService, TagService,
};

/// A single backend implementing every service port.
pub trait Backend:
    AccesskeyService
    + ActiveflowService
    + AuthService
    + BillingService
    + CallService
    + ContactService
    + FlowService
    + TagService
    + 'static
{
}

impl<T> Backend for T where
    T: AccesskeyService
        + ActiveflowService
        + AuthService
        + BillingService
        + CallService
        + ContactService
        + FlowService
        + TagService
        + 'static
{
}

/// Service ports the gateway forwards requests to.
#[derive(Clone)]
pub struct ServiceHandler {
    /// Accesskey management.
    pub accesskeys: Arc<dyn AccesskeyService>,
    /// Running flows.
    pub activeflows: Arc<dyn ActiveflowService>,
    /// Credential verification.
    pub auth: Arc<dyn AuthService>,
    /// Billing accounts and charges.
    pub billing: Arc<dyn BillingService>,
    /// Calls and call control.
    pub calls: Arc<dyn CallService>,
    /// Address book.
    pub contacts: Arc<dyn ContactService>,
    /// Stored flows.
    pub flows: Arc<dyn FlowService>,
    /// Tags.
    pub tags: Arc<dyn TagService>,
}

impl ServiceHandler {
    /// Routes every port to the same backend.
    #[must_use]
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: Backend,
    {
        Self {
            accesskeys: backend.clone(),
            activeflows: backend.clone(),
            auth: backend.clone(),
            billing: backend.clone(),
            calls: backend.clone(),
            contacts: backend.clone(),
            flows: backend.clone(),
            tags: backend,
        }
    }
}
