//! Route table for every authenticated resource endpoint.

use axum::routing::MethodFilter;
use switchyard_application::ContactLookup;

use crate::dispatch::{Body, ResourceId, Route, command, create, delete, get, list, post, put};
use crate::dto::{
    AddContactTagRequest, BalanceRequest, ContactEmailRequest, ContactPhoneNumberRequest,
    CreateAccesskeyRequest, CreateActiveflowRequest, CreateBillingAccountRequest,
    CreateCallRequest, CreateContactRequest, MuteRequest, PaymentInfoRequest, SaveFlowRequest,
    SaveTagRequest, TalkRequest, UpdateAccesskeyRequest, UpdateBillingAccountRequest,
    UpdateContactRequest,
};

pub(super) fn route_table() -> Vec<Route> {
    [
        accesskey_routes(),
        tag_routes(),
        contact_routes(),
        call_routes(),
        flow_routes(),
        activeflow_routes(),
        billing_routes(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn accesskey_routes() -> Vec<Route> {
    vec![
        list("/accesskeys", |services, caller, page| async move {
            services.accesskeys.list_accesskeys(&caller, &page).await
        }),
        post(
            "/accesskeys",
            |services, caller, Body(request): Body<CreateAccesskeyRequest>| async move {
                services
                    .accesskeys
                    .create_accesskey(&caller, request.into())
                    .await
            },
        ),
        get(
            "/accesskeys/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.accesskeys.get_accesskey(&caller, id).await
            },
        ),
        put(
            "/accesskeys/{id}",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<UpdateAccesskeyRequest>)| async move {
                services
                    .accesskeys
                    .update_accesskey(&caller, id, request.into())
                    .await
            },
        ),
        delete(
            "/accesskeys/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.accesskeys.delete_accesskey(&caller, id).await
            },
        ),
    ]
}

fn tag_routes() -> Vec<Route> {
    vec![
        list("/tags", |services, caller, page| async move {
            services.tags.list_tags(&caller, &page).await
        }),
        post(
            "/tags",
            |services, caller, Body(request): Body<SaveTagRequest>| async move {
                services.tags.create_tag(&caller, request.into()).await
            },
        ),
        get(
            "/tags/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.tags.get_tag(&caller, id).await
            },
        ),
        put(
            "/tags/{id}",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<SaveTagRequest>)| async move {
                services.tags.update_tag(&caller, id, request.into()).await
            },
        ),
        delete(
            "/tags/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.tags.delete_tag(&caller, id).await
            },
        ),
    ]
}

fn contact_routes() -> Vec<Route> {
    vec![
        list("/contacts", |services, caller, page| async move {
            services.contacts.list_contacts(&caller, &page).await
        }),
        get(
            "/contacts/lookup",
            |services, caller, lookup: ContactLookup| async move {
                services.contacts.lookup_contact(&caller, lookup).await
            },
        ),
        create(
            "/contacts",
            |services, caller, Body(request): Body<CreateContactRequest>| async move {
                services.contacts.create_contact(&caller, request.into()).await
            },
        ),
        get(
            "/contacts/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.contacts.get_contact(&caller, id).await
            },
        ),
        put(
            "/contacts/{id}",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<UpdateContactRequest>)| async move {
                services
                    .contacts
                    .update_contact(&caller, id, request.into())
                    .await
            },
        ),
        delete(
            "/contacts/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.contacts.delete_contact(&caller, id).await
            },
        ),
        create(
            "/contacts/{id}/phone-numbers",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<ContactPhoneNumberRequest>)| async move {
                services
                    .contacts
                    .add_contact_phone_number(&caller, id, request.into())
                    .await
            },
        ),
        delete(
            "/contacts/{id}/phone-numbers/{phone_number_id}",
            |services, caller, (ResourceId(id), ResourceId(phone_number_id)): (ResourceId, ResourceId)| async move {
                services
                    .contacts
                    .remove_contact_phone_number(&caller, id, phone_number_id)
                    .await
            },
        ),
        create(
            "/contacts/{id}/emails",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<ContactEmailRequest>)| async move {
                services
                    .contacts
                    .add_contact_email(&caller, id, request.into())
                    .await
            },
        ),
        delete(
            "/contacts/{id}/emails/{email_id}",
            |services, caller, (ResourceId(id), ResourceId(email_id)): (ResourceId, ResourceId)| async move {
                services
                    .contacts
                    .remove_contact_email(&caller, id, email_id)
                    .await
            },
        ),
        create(
            "/contacts/{id}/tags",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<AddContactTagRequest>)| async move {
                services
                    .contacts
                    .add_contact_tag(&caller, id, request.tag_id)
                    .await
            },
        ),
        delete(
            "/contacts/{id}/tags/{tag_id}",
            |services, caller, (ResourceId(id), ResourceId(tag_id)): (ResourceId, ResourceId)| async move {
                services.contacts.remove_contact_tag(&caller, id, tag_id).await
            },
        ),
    ]
}

fn call_routes() -> Vec<Route> {
    vec![
        list("/calls", |services, caller, page| async move {
            services.calls.list_calls(&caller, &page).await
        }),
        post(
            "/calls",
            |services, caller, Body(request): Body<CreateCallRequest>| async move {
                services.calls.create_calls(&caller, request.into()).await
            },
        ),
        get(
            "/calls/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.get_call(&caller, id).await
            },
        ),
        delete(
            "/calls/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.delete_call(&caller, id).await
            },
        ),
        post(
            "/calls/{id}/hangup",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.hangup_call(&caller, id).await
            },
        ),
        command(
            MethodFilter::POST,
            "/calls/{id}/talk",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<TalkRequest>)| async move {
                services.calls.talk_call(&caller, id, request.into()).await
            },
        ),
        command(
            MethodFilter::POST,
            "/calls/{id}/hold",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.hold_call(&caller, id).await
            },
        ),
        command(
            MethodFilter::DELETE,
            "/calls/{id}/hold",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.unhold_call(&caller, id).await
            },
        ),
        command(
            MethodFilter::POST,
            "/calls/{id}/mute",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<MuteRequest>)| async move {
                services.calls.mute_call(&caller, id, request.direction).await
            },
        ),
        command(
            MethodFilter::DELETE,
            "/calls/{id}/mute",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<MuteRequest>)| async move {
                services.calls.unmute_call(&caller, id, request.direction).await
            },
        ),
        command(
            MethodFilter::POST,
            "/calls/{id}/moh",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.start_call_moh(&caller, id).await
            },
        ),
        command(
            MethodFilter::DELETE,
            "/calls/{id}/moh",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.stop_call_moh(&caller, id).await
            },
        ),
        command(
            MethodFilter::POST,
            "/calls/{id}/silence",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.silence_call(&caller, id).await
            },
        ),
        command(
            MethodFilter::DELETE,
            "/calls/{id}/silence",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.calls.unsilence_call(&caller, id).await
            },
        ),
    ]
}

fn flow_routes() -> Vec<Route> {
    vec![
        list("/flows", |services, caller, page| async move {
            services.flows.list_flows(&caller, &page).await
        }),
        post(
            "/flows",
            |services, caller, Body(request): Body<SaveFlowRequest>| async move {
                services.flows.create_flow(&caller, request.into()).await
            },
        ),
        get(
            "/flows/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.flows.get_flow(&caller, id).await
            },
        ),
        put(
            "/flows/{id}",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<SaveFlowRequest>)| async move {
                services.flows.update_flow(&caller, id, request.into()).await
            },
        ),
        delete(
            "/flows/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.flows.delete_flow(&caller, id).await
            },
        ),
    ]
}

fn activeflow_routes() -> Vec<Route> {
    vec![
        list("/activeflows", |services, caller, page| async move {
            services.activeflows.list_activeflows(&caller, &page).await
        }),
        post(
            "/activeflows",
            |services, caller, Body(request): Body<CreateActiveflowRequest>| async move {
                services
                    .activeflows
                    .create_activeflow(&caller, request.into())
                    .await
            },
        ),
        get(
            "/activeflows/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.activeflows.get_activeflow(&caller, id).await
            },
        ),
        delete(
            "/activeflows/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.activeflows.delete_activeflow(&caller, id).await
            },
        ),
        post(
            "/activeflows/{id}/stop",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.activeflows.stop_activeflow(&caller, id).await
            },
        ),
    ]
}

fn billing_routes() -> Vec<Route> {
    vec![
        list("/billing_accounts", |services, caller, page| async move {
            services.billing.list_billing_accounts(&caller, &page).await
        }),
        post(
            "/billing_accounts",
            |services, caller, Body(request): Body<CreateBillingAccountRequest>| async move {
                services
                    .billing
                    .create_billing_account(&caller, request.into())
                    .await
            },
        ),
        get(
            "/billing_accounts/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.billing.get_billing_account(&caller, id).await
            },
        ),
        put(
            "/billing_accounts/{id}",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<UpdateBillingAccountRequest>)| async move {
                services
                    .billing
                    .update_billing_account(&caller, id, request.into())
                    .await
            },
        ),
        delete(
            "/billing_accounts/{id}",
            |services, caller, ResourceId(id): ResourceId| async move {
                services.billing.delete_billing_account(&caller, id).await
            },
        ),
        put(
            "/billing_accounts/{id}/payment_info",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<PaymentInfoRequest>)| async move {
                services
                    .billing
                    .update_billing_account_payment_info(&caller, id, request.into())
                    .await
            },
        ),
        post(
            "/billing_accounts/{id}/balance_add_force",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<BalanceRequest>)| async move {
                services
                    .billing
                    .add_billing_account_balance(&caller, id, request.balance)
                    .await
            },
        ),
        post(
            "/billing_accounts/{id}/balance_subtract_force",
            |services,
             caller,
             (ResourceId(id), Body(request)): (ResourceId, Body<BalanceRequest>)| async move {
                services
                    .billing
                    .subtract_billing_account_balance(&caller, id, request.balance)
                    .await
            },
        ),
        list("/billings", |services, caller, page| async move {
            services.billing.list_billings(&caller, &page).await
        }),
    ]
}
