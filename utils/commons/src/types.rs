use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

/// Token ID type used by the fungible token contract. The contract manages a
/// single token kind, so the unit ID saves bytes on every call.
pub type ContractTokenId = TokenIdUnit;

/// Token amount type used by the fungible token contract.
pub type ContractTokenAmount = TokenAmountU64;

pub type TransferParameter = TransferParams<ContractTokenId, ContractTokenAmount>;

/// Parameter type for the CIS-2 function `balanceOf` specialized to the
/// token ID used by the fungible token contract.
pub type ContractBalanceOfQueryParams = BalanceOfQueryParams<ContractTokenId>;

pub type ContractBalanceOfQueryResponse = BalanceOfQueryResponse<ContractTokenAmount>;
