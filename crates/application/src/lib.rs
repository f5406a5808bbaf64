//! Backend service ports consumed by the gateway.

#![forbid(unsafe_code)]

mod service_handler;
mod service_ports;

pub use service_handler::{Backend, ServiceHandler};
pub use service_ports::{
    AccesskeyService, ActiveflowService, AuthService, BillingService, CallService,
    ContactLookup, ContactService, CreateAccesskeyInput, CreateActiveflowInput,
    CreateBillingAccountInput, CreateCallInput, CreateContactInput, EmailInput, FlowService,
    LoginInput, PaymentInfoInput, PhoneNumberInput, SaveFlowInput, SaveTagInput, TagService,
    TalkInput, UpdateAccesskeyInput, UpdateBillingAccountInput, UpdateContactInput,
};
