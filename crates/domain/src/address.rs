use serde::{Deserialize, Serialize};

/// A reachable endpoint: phone number, SIP URI, agent, extension and so on.
///
/// Every field is a plain string; absent values are empty, never "unset".
/// The `type` enumeration is validated by the backend, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Address type, e.g. `tel`, `sip`, `agent`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Type-specific target such as `+821100000001`.
    pub target: String,
    /// Human readable target name.
    pub target_name: String,
    /// Display name.
    pub name: String,
    /// Free-form detail.
    pub detail: String,
}
