use commons::{ContractTokenAmount, ContractTokenId};
use concordium_cis2::TokenIdUnit;
use concordium_std::*;

/// The single token kind managed by this contract.
pub const TOKEN_ID: ContractTokenId = TokenIdUnit();

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct MintParams {
    /// Address the minted tokens are credited to.
    pub owner: Address,
    /// Number of tokens to mint.
    pub amount: ContractTokenAmount,
}

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct BurnParams {
    /// Number of the sender's tokens to burn.
    pub amount: ContractTokenAmount,
}
