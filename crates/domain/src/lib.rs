//! Domain values exchanged between the gateway and backend services.

#![forbid(unsafe_code)]

mod accesskey;
mod action;
mod address;
mod billing;
mod call;
mod contact;
mod flow;
mod tag;

pub use accesskey::Accesskey;
pub use action::Action;
pub use address::Address;
pub use billing::{Billing, BillingAccount};
pub use call::{Call, CallCreation, Groupcall};
pub use contact::{Contact, ContactEmail, ContactPhoneNumber};
pub use flow::{Activeflow, Flow};
pub use tag::Tag;
