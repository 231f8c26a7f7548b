use commons::Percentage;
use concordium_std::*;

use crate::state::BidEntry;

/// Minimum percentage a new bid must exceed the previous one by.
pub const MINIMUM_RAISE_PERCENT: u64 = 5;

/// Window before the deadline within which a bid pushes the deadline
/// forward, and the size of that push.
pub const EXTENSION_WINDOW_MINUTES: u64 = 10;

/// Share of the winning bid retained by the operator on settlement.
pub const COMMISSION_PERCENT: u64 = 2;

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct InitParams {
    /// Auction duration in minutes, starting from the instantiation time.
    pub duration_minutes: u64,
}

/// Read-only snapshot of the auction configuration and progress.
#[derive(Debug, Serialize, SchemaType)]
pub struct ViewResult {
    /// Account allowed to settle the auction and collect the commission.
    pub operator: AccountAddress,
    /// Minimum percentage a new bid must exceed the previous one by.
    pub minimum_raise: Percentage,
    /// Anti-snipe extension window.
    pub extension_window: Duration,
    /// Commission retained by the operator on settlement.
    pub commission: Percentage,
    /// Current deadline.
    pub deadline: Timestamp,
    /// Whether the auction has been settled.
    pub ended: bool,
    /// Current winning bid, if any bid was placed.
    pub winning: Option<BidEntry>,
}
