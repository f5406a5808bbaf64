mod accesskeys;
mod auth;
mod billing;
mod calls;
mod contacts;
mod flows;
mod tags;

pub use accesskeys::{AccesskeyService, CreateAccesskeyInput, UpdateAccesskeyInput};
pub use auth::{AuthService, LoginInput};
pub use billing::{
    BillingService, CreateBillingAccountInput, PaymentInfoInput, UpdateBillingAccountInput,
};
pub use calls::{CallService, CreateCallInput, TalkInput};
pub use contacts::{
    ContactLookup, ContactService, CreateContactInput, EmailInput, PhoneNumberInput,
    UpdateContactInput,
};
pub use flows::{ActiveflowService, CreateActiveflowInput, FlowService, SaveFlowInput};
pub use tags::{SaveTagInput, TagService};
