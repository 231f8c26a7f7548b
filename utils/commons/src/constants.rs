/// Tag for the Custom Bid event.
pub const BID_TAG: u8 = u8::MAX - 1;

/// Tag for the Custom Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 2;

/// Tag for the Custom Auction Ended event.
pub const ENDED_TAG: u8 = u8::MAX - 3;

/// Tag for the Custom Donate event.
pub const DONATE_TAG: u8 = u8::MAX - 4;

/// Tag for the Custom Claim event.
pub const CLAIM_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Deposit event.
pub const DEPOSIT_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Fallback event.
pub const FALLBACK_TAG: u8 = u8::MAX - 7;
