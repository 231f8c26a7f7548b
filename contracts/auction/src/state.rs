use commons::{CustomContractError, Percentage};
use concordium_std::*;

use crate::external::{
    COMMISSION_PERCENT, EXTENSION_WINDOW_MINUTES, MINIMUM_RAISE_PERCENT,
};

/// A single accepted bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct BidEntry {
    /// Bidder account address.
    pub bidder: AccountAddress,
    /// Full bid amount, escrowed on acceptance.
    pub amount: Amount,
}

/// Immutable auction parameters, fixed at instantiation.
#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct Config {
    /// Account allowed to settle the auction and collect the commission.
    pub operator: AccountAddress,
    /// Minimum percentage a new bid must exceed the previous one by.
    pub minimum_raise: Percentage,
    /// Window before the deadline within which a bid pushes the deadline
    /// forward by one full window.
    pub extension_window: Duration,
    /// Share of the winning bid retained by the operator on settlement.
    pub commission: Percentage,
}

/// Funds that must leave the contract after a settlement was written.
#[must_use]
pub struct Settlement {
    /// The frozen winning bid.
    pub winner: BidEntry,
    /// Commission owed to the operator.
    pub commission: Amount,
    /// Escrow balances that were zeroed and must be returned, one entry per
    /// losing participant.
    pub refunds: Vec<(AccountAddress, Amount)>,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Immutable auction parameters.
    pub config: Config,
    /// Absolute expiry time. Only ever pushed forward while the auction is
    /// active, frozen once settled.
    pub deadline: Timestamp,
    /// Terminal marker, set exactly once by settlement.
    pub ended: bool,
    /// Accepted bids in submission order. Append only.
    pub history: Vec<BidEntry>,
    /// Mirror of the last history entry, frozen at settlement.
    pub winning: Option<BidEntry>,
    /// Funds held for each participant, not yet withdrawn or refunded.
    pub escrow: StateMap<AccountAddress, Amount, S>,
}

impl<S: HasStateApi> State<S> {
    /// Create a fresh auction with the fixed default parameters and no bids.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        operator: AccountAddress,
        deadline: Timestamp,
    ) -> Self {
        Self {
            config: Config {
                operator,
                minimum_raise: Percentage::from_percent(MINIMUM_RAISE_PERCENT),
                extension_window: Duration::from_minutes(EXTENSION_WINDOW_MINUTES),
                commission: Percentage::from_percent(COMMISSION_PERCENT),
            },
            deadline,
            ended: false,
            history: Vec::new(),
            winning: None,
            escrow: state_builder.new_map(),
        }
    }

    /// Admit a bid. Every check precedes the first mutation, so a rejected
    /// bid leaves the state untouched. A bid landing within the extension
    /// window of the deadline pushes the deadline by one full window; the
    /// push compounds across late bids and has no ceiling.
    pub fn submit_bid(
        &mut self,
        bidder: AccountAddress,
        amount: Amount,
        slot_time: Timestamp,
    ) -> Result<(), CustomContractError> {
        ensure!(!self.ended, CustomContractError::AuctionNotActive);
        ensure!(slot_time < self.deadline, CustomContractError::AuctionNotActive);

        match self.winning {
            Some(ref current) => ensure!(
                Percentage::from_percent(100) + self.config.minimum_raise
                    <= Percentage::of_amount(amount, current.amount),
                CustomContractError::BidTooLow
            ),
            None => ensure!(amount > Amount::zero(), CustomContractError::BidTooLow),
        }

        let extended_deadline = if slot_time
            .checked_add(self.config.extension_window)
            .ok_or(CustomContractError::InvalidDuration)?
            >= self.deadline
        {
            Some(
                self.deadline
                    .checked_add(self.config.extension_window)
                    .ok_or(CustomContractError::InvalidDuration)?,
            )
        } else {
            None
        };

        let entry = BidEntry { bidder, amount };
        self.history.push(entry.clone());
        self.winning = Some(entry);

        let mut held = self.escrow.entry(bidder).or_insert(Amount::zero());
        *held += amount;
        drop(held);

        if let Some(deadline) = extended_deadline {
            self.deadline = deadline;
        }

        Ok(())
    }

    /// The frozen winning bid. Only available once the auction was settled.
    pub fn winner(&self) -> Result<BidEntry, CustomContractError> {
        ensure!(self.ended, CustomContractError::NotFinalized);
        self.winning.clone().ok_or(CustomContractError::NoBids)
    }

    /// Book a withdrawal for `caller` and return the amount that must be
    /// transferred out. Escrow is reduced here, before any transfer is
    /// issued by the caller of this function.
    ///
    /// While the auction is active only the surplus above the caller's own
    /// latest bid is released. After settlement every participant except the
    /// winner can drain their remaining escrow.
    pub fn withdraw_excess(
        &mut self,
        caller: AccountAddress,
    ) -> Result<Amount, CustomContractError> {
        let held = self
            .escrow
            .get(&caller)
            .map(|held| *held)
            .unwrap_or_else(Amount::zero);

        if self.ended {
            let winner = self.winning.as_ref().map(|bid| bid.bidder);
            ensure!(
                Some(caller) != winner,
                CustomContractError::WinnerCannotWithdrawExcess
            );
            ensure!(held > Amount::zero(), CustomContractError::NothingToWithdraw);
            self.escrow.insert(caller, Amount::zero());
            Ok(held)
        } else {
            let latest = self.latest_bid_of(&caller);
            ensure!(held > latest, CustomContractError::NothingToWithdraw);
            self.escrow.insert(caller, latest);
            Ok(held - latest)
        }
    }

    /// Settle the auction. Freezes the winner, computes the commission and
    /// zeroes every losing participant's escrow. No funds leave here; the
    /// returned settlement lists the transfers the caller must issue after
    /// all ledger updates are already written.
    ///
    /// Refunds are keyed by current escrow balance rather than history
    /// entries, so a participant with several recorded bids is refunded
    /// exactly once.
    pub fn finalize(&mut self, slot_time: Timestamp) -> Result<Settlement, CustomContractError> {
        ensure!(!self.ended, CustomContractError::AuctionAlreadyEnded);
        ensure!(
            slot_time >= self.deadline,
            CustomContractError::AuctionStillActive
        );
        let winner = self.winning.clone().ok_or(CustomContractError::NoBids)?;

        self.ended = true;

        let mut refunds = Vec::new();
        for (account, held) in self.escrow.iter() {
            if *account != winner.bidder && *held > Amount::zero() {
                refunds.push((*account, *held));
            }
        }
        for (account, _) in refunds.iter() {
            self.escrow.insert(*account, Amount::zero());
        }

        let commission = self.config.commission * winner.amount;
        Ok(Settlement {
            winner,
            commission,
            refunds,
        })
    }

    /// The net winning amount owed to a destination of the operator's
    /// choosing. The ledger keeps no record of this payout, so the operator
    /// can request it repeatedly for as long as the contract balance covers
    /// it.
    pub fn main_bid_payout(&self) -> Result<Amount, CustomContractError> {
        let winner = self.winner()?;
        Ok(winner.amount - self.config.commission * winner.amount)
    }

    /// Amount of `account`'s most recent recorded bid, zero if it never bid.
    fn latest_bid_of(&self, account: &AccountAddress) -> Amount {
        self.history
            .iter()
            .rev()
            .find(|entry| entry.bidder == *account)
            .map(|entry| entry.amount)
            .unwrap_or_else(Amount::zero)
    }
}
