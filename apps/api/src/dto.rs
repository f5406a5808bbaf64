//! Wire payloads and their conversion into application inputs.

mod accesskeys;
mod auth;
mod billing;
mod calls;
mod common;
mod contacts;
mod flows;
mod payload;
mod tags;

pub use accesskeys::{CreateAccesskeyRequest, UpdateAccesskeyRequest};
pub use auth::{LoginRequest, LoginResponse};
pub use billing::{
    BalanceRequest, CreateBillingAccountRequest, PaymentInfoRequest, UpdateBillingAccountRequest,
};
pub use calls::{CreateCallRequest, MuteRequest, TalkRequest};
pub use common::HealthResponse;
pub use contacts::{
    AddContactTagRequest, ContactEmailRequest, ContactPhoneNumberRequest, CreateContactRequest,
    UpdateContactRequest,
};
pub use flows::{CreateActiveflowRequest, SaveFlowRequest};
pub use tags::SaveTagRequest;
