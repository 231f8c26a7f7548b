use super::*;

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct InitParams {
    /// Lockup duration in minutes, starting from the instantiation time.
    pub lockup_minutes: u64,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Account that can claim the pool once it expires.
    pub beneficiary: AccountAddress,
    /// Time after which donations close and the pool can be claimed.
    pub expiry: Timestamp,
    /// Total donated and not yet claimed.
    pub total: Amount,
    /// Accumulated donations per donor, kept as a record.
    pub donations: StateMap<AccountAddress, Amount, S>,
}

/// Read-only snapshot of the pool.
#[derive(Debug, Serialize, SchemaType)]
pub struct ViewResult {
    pub beneficiary: AccountAddress,
    pub expiry: Timestamp,
    pub total: Amount,
}
