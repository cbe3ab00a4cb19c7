use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Provisioning lifecycle points the hook can be invoked at.
///
/// Wire names follow the hosting framework's convention
/// (`CREATE_PRE_PROVISION` and friends).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvocationPoint {
    CreatePreProvision,
    UpdatePreProvision,
    DeletePreProvision,
}

impl InvocationPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvocationPoint::CreatePreProvision => "CREATE_PRE_PROVISION",
            InvocationPoint::UpdatePreProvision => "UPDATE_PRE_PROVISION",
            InvocationPoint::DeletePreProvision => "DELETE_PRE_PROVISION",
        }
    }
}
