use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Sender is not allowed to call this function (Error code: -4).
    Unauthorized,
    /// Only account addresses can call this function (Error code: -5).
    OnlyAccountAddress,
    /// Bid placed after the deadline or after the auction has been settled
    /// (Error code: -6).
    AuctionNotActive,
    /// Attempt to settle an auction a second time (Error code: -7).
    AuctionAlreadyEnded,
    /// Attempt to settle the auction before its deadline (Error code: -8).
    AuctionStillActive,
    /// Bid does not exceed the previous one by the minimum raise
    /// (Error code: -9).
    BidTooLow,
    /// No withdrawable funds are held for the caller (Error code: -10).
    NothingToWithdraw,
    /// The auction winner cannot reclaim escrow after settlement
    /// (Error code: -11).
    WinnerCannotWithdrawExcess,
    /// Winner queried before the auction was settled (Error code: -12).
    NotFinalized,
    /// Attempt to settle an auction without any bids (Error code: -13).
    NoBids,
    /// Donation placed after the pool expiry (Error code: -14).
    PoolExpired,
    /// Claim attempted before the pool expiry (Error code: -15).
    PoolStillLocked,
    /// Duration is either too far in the future or in the past
    /// (Error code: -16).
    InvalidDuration,
    /// Unsupported (Error code: -17).
    Unsupported,
    /// Failed to invoke a contract (Error code: -18).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -19).
    InvokeTransferError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError.
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
