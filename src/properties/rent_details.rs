use serde::Serialize;
use uuid::Uuid;

/// Monthly costs of the property, all amounts are in whole units of `currency`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentDetails {
    pub id: Uuid,
    pub rent_amount: u32,
    pub currency: String,
    pub security_deposit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utility_costs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_charges: Option<u32>,
}
