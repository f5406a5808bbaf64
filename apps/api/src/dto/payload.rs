use serde::Deserialize;
use serde_json::{Map, Value};
use switchyard_core::timestamp::parse_timestamp;
use switchyard_domain::{Action, Address};
use ts_rs::TS;
use uuid::Uuid;

/// Flow action as sent by clients.
///
/// Identifiers and the schedule are kept as raw strings so that a malformed
/// value degrades during conversion instead of failing the whole request.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/action-request.ts"
)]
pub struct ActionRequest {
    pub id: Option<String>,
    pub next_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[ts(type = "Record<string, unknown> | null")]
    pub option: Option<Map<String, Value>>,
    pub execute_at: Option<String>,
}

/// Address as sent by clients. Every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/address-request.ts"
)]
pub struct AddressRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub target: Option<String>,
    pub target_name: Option<String>,
    pub name: Option<String>,
    pub detail: Option<String>,
}

/// Parses an identifier embedded in a payload. Missing or malformed values
/// become the nil identifier.
pub(crate) fn permissive_id(value: Option<&str>) -> Uuid {
    value
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .unwrap_or_else(Uuid::nil)
}

impl From<ActionRequest> for Action {
    fn from(value: ActionRequest) -> Self {
        Self {
            id: permissive_id(value.id.as_deref()),
            next_id: permissive_id(value.next_id.as_deref()),
            kind: value.kind.unwrap_or_default(),
            option: value.option,
            execute_at: value.execute_at.as_deref().and_then(parse_timestamp),
        }
    }
}

impl From<AddressRequest> for Address {
    fn from(value: AddressRequest) -> Self {
        Self {
            kind: value.kind.unwrap_or_default(),
            target: value.target.unwrap_or_default(),
            target_name: value.target_name.unwrap_or_default(),
            name: value.name.unwrap_or_default(),
            detail: value.detail.unwrap_or_default(),
        }
    }
}

pub(crate) fn convert_actions(actions: Vec<ActionRequest>) -> Vec<Action> {
    actions.into_iter().map(Action::from).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use switchyard_domain::{Action, Address};
    use uuid::Uuid;

    use super::{ActionRequest, AddressRequest};

    fn action(value: serde_json::Value) -> Result<Action, serde_json::Error> {
        serde_json::from_value::<ActionRequest>(value).map(Action::from)
    }

    #[test]
    fn converts_well_formed_action() -> Result<(), serde_json::Error> {
        let converted = action(json!({
            "id": "ac0e4a1a-8004-11ec-9b4e-0b3bcd4fcc0b",
            "next_id": "b0e2f7a8-8004-11ec-a86e-1f6a8a4d1fb6",
            "type": "talk",
            "option": {"text": "hello", "language": "en-US"},
            "execute_at": "2024-05-01T10:00:00.000Z",
        }))?;

        assert_eq!(
            converted.id,
            Uuid::from_u128(0xac0e4a1a_8004_11ec_9b4e_0b3bcd4fcc0b)
        );
        assert_eq!(
            converted.next_id,
            Uuid::from_u128(0xb0e2f7a8_8004_11ec_a86e_1f6a8a4d1fb6)
        );
        assert_eq!(converted.kind, "talk");
        assert_eq!(
            converted.option.as_ref().and_then(|option| option.get("text")),
            Some(&json!("hello"))
        );
        assert!(converted.execute_at.is_some());
        Ok(())
    }

    #[test]
    fn malformed_identifiers_become_nil() -> Result<(), serde_json::Error> {
        let converted = action(json!({
            "id": "not-a-uuid",
            "next_id": "",
            "type": "answer",
        }))?;

        assert_eq!(converted.id, Uuid::nil());
        assert_eq!(converted.next_id, Uuid::nil());
        assert_eq!(converted.kind, "answer");
        Ok(())
    }

    #[test]
    fn empty_action_converts() -> Result<(), serde_json::Error> {
        let converted = action(json!({}))?;
        assert_eq!(converted, Action::default());
        assert!(converted.option.is_none());
        assert!(converted.execute_at.is_none());
        Ok(())
    }

    #[test]
    fn unparsable_schedule_is_absent() -> Result<(), serde_json::Error> {
        let converted = action(json!({"type": "answer", "execute_at": "tomorrow"}))?;
        assert!(converted.execute_at.is_none());
        Ok(())
    }

    #[test]
    fn absent_address_fields_become_empty() -> Result<(), serde_json::Error> {
        let request: AddressRequest = serde_json::from_value(json!({
            "type": "tel",
            "target": "+821100000001",
            "name": null,
        }))?;
        let converted = Address::from(request);

        assert_eq!(converted.kind, "tel");
        assert_eq!(converted.target, "+821100000001");
        assert_eq!(converted.target_name, "");
        assert_eq!(converted.name, "");
        assert_eq!(converted.detail, "");
        Ok(())
    }

    #[test]
    fn address_conversion_is_idempotent() {
        let once = Address::from(AddressRequest {
            kind: Some("sip".to_owned()),
            target: Some("alice@example.com".to_owned()),
            ..AddressRequest::default()
        });

        let twice = Address::from(AddressRequest {
            kind: Some(once.kind.clone()),
            target: Some(once.target.clone()),
            target_name: Some(once.target_name.clone()),
            name: Some(once.name.clone()),
            detail: Some(once.detail.clone()),
        });
        assert_eq!(once, twice);
    }
}
