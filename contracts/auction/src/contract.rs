use commons::*;
use concordium_std::*;

use crate::events::*;
use crate::external::*;
use crate::state::*;

/// Create a new auction with the fixed default parameters and a deadline of
/// `duration_minutes` from the instantiation time. The instantiating account
/// becomes the operator.
#[init(contract = "Auction", parameter = "InitParams")]
fn contract_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;
    let deadline = ctx
        .metadata()
        .slot_time()
        .checked_add(Duration::from_minutes(params.duration_minutes))
        .ok_or(CustomContractError::InvalidDuration)?;
    Ok(State::new(state_builder, ctx.init_origin(), deadline))
}

/// Place a bid. The attached amount is the full bid; any funds the sender
/// escrowed with earlier bids become withdrawable excess. A bid landing
/// within the extension window pushes the deadline by one full window.
///
/// Rejects if:
/// - The sender is a contract.
/// - The auction was settled or the deadline has passed.
/// - The amount does not exceed the current winning bid by the minimum
///   raise, or a first bid of zero.
#[receive(
    contract = "Auction",
    name = "bid",
    payable,
    mutable,
    enable_logger
)]
fn contract_bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let bidder = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    host.state_mut()
        .submit_bid(bidder, amount, ctx.metadata().slot_time())?;

    // Event for the accepted bid.
    logger.log(&AuctionEvent::Bid(BidEvent { bidder, amount }))?;

    Ok(())
}

/// View the full bid history in submission order.
#[receive(contract = "Auction", name = "viewHistory", return_value = "Vec<BidEntry>")]
fn contract_view_history<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<BidEntry>> {
    Ok(host.state().history.clone())
}

/// View the frozen winning bid. Fails until the auction was settled.
#[receive(contract = "Auction", name = "viewWinner", return_value = "BidEntry")]
fn contract_view_winner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<BidEntry> {
    Ok(host.state().winner()?)
}

/// View the auction configuration and current progress.
#[receive(contract = "Auction", name = "view", return_value = "ViewResult")]
fn contract_view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewResult> {
    let state = host.state();
    Ok(ViewResult {
        operator: state.config.operator,
        minimum_raise: state.config.minimum_raise,
        extension_window: state.config.extension_window,
        commission: state.config.commission,
        deadline: state.deadline,
        ended: state.ended,
        winning: state.winning.clone(),
    })
}

/// Withdraw escrowed funds not locked by the sender's own latest bid. While
/// the auction is active this releases the surplus above that bid; after
/// settlement every participant except the winner can drain their remaining
/// escrow. The escrow entry is reduced before the transfer is issued, so a
/// reentrant call observes the already reduced balance.
#[receive(contract = "Auction", name = "withdraw", mutable, enable_logger)]
fn contract_withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let caller = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let payout = host.state_mut().withdraw_excess(caller)?;

    // Event for the partial withdrawal.
    logger.log(&AuctionEvent::Withdraw(WithdrawEvent {
        account: caller,
        amount: payout,
    }))?;

    host.invoke_transfer(&caller, payout)?;

    Ok(())
}

/// Settle the auction: freeze the winner, pay the commission to the operator
/// and refund every losing participant's remaining escrow. All ledger
/// updates are written before the first transfer leaves the contract.
///
/// Rejects if:
/// - The sender is not the operator.
/// - The deadline has not passed yet, the auction was already settled, or no
///   bids were placed.
#[receive(contract = "Auction", name = "finalize", mutable, enable_logger)]
fn contract_finalize<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let operator = host.state().config.operator;
    ensure!(
        ctx.sender().matches_account(&operator),
        CustomContractError::Unauthorized.into()
    );

    let settlement = host.state_mut().finalize(ctx.metadata().slot_time())?;

    // Event for the settlement, carrying the winning amount net of commission.
    logger.log(&AuctionEvent::Ended(EndedEvent {
        winner: settlement.winner.bidder,
        amount: settlement.winner.amount - settlement.commission,
    }))?;

    if settlement.commission > Amount::zero() {
        host.invoke_transfer(&operator, settlement.commission)?;
    }
    for (account, refund) in settlement.refunds.iter() {
        host.invoke_transfer(account, *refund)?;
    }

    Ok(())
}

/// Pay the winning amount net of commission to a destination of the
/// operator's choosing. The ledger keeps no record of this payout, so the
/// operator can repeat it for as long as the contract balance covers it.
#[receive(
    contract = "Auction",
    name = "withdrawMain",
    parameter = "AccountAddress",
    mutable
)]
fn contract_withdraw_main<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let destination = AccountAddress::deserial(&mut ctx.parameter_cursor())?;

    let operator = host.state().config.operator;
    ensure!(
        ctx.sender().matches_account(&operator),
        CustomContractError::Unauthorized.into()
    );

    let payout = host.state().main_bid_payout()?;
    host.invoke_transfer(&destination, payout)?;

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OPERATOR: AccountAddress = AccountAddress([0u8; 32]);
    const ALICE: AccountAddress = AccountAddress([1u8; 32]);
    const BOB: AccountAddress = AccountAddress([2u8; 32]);
    const DESTINATION: AccountAddress = AccountAddress([3u8; 32]);

    const START: u64 = 1_000;
    const DURATION_MINUTES: u64 = 60;
    /// Deadline in milliseconds implied by `START` and `DURATION_MINUTES`.
    const DEADLINE: u64 = START + DURATION_MINUTES * 60_000;
    /// The extension window in milliseconds.
    const WINDOW: u64 = EXTENSION_WINDOW_MINUTES * 60_000;

    fn init_auction() -> TestHost<State<TestStateApi>> {
        let parameter_bytes = to_bytes(&InitParams {
            duration_minutes: DURATION_MINUTES,
        });
        let mut ctx = TestInitContext::empty();
        ctx.set_parameter(&parameter_bytes);
        ctx.set_init_origin(OPERATOR);
        ctx.set_metadata_slot_time(Timestamp::from_timestamp_millis(START));

        let mut state_builder = TestStateBuilder::new();
        let state = contract_init(&ctx, &mut state_builder).expect_report("Init failed");
        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: AccountAddress, slot_time: u64) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender));
        ctx.set_metadata_slot_time(Timestamp::from_timestamp_millis(slot_time));
        ctx
    }

    fn bid(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        bidder: AccountAddress,
        micro_ccd: u64,
        slot_time: u64,
    ) -> ContractResult<()> {
        let ctx = receive_ctx(bidder, slot_time);
        contract_bid(&ctx, host, Amount::from_micro_ccd(micro_ccd), logger)
    }

    fn escrow_of(host: &TestHost<State<TestStateApi>>, account: AccountAddress) -> Amount {
        host.state()
            .escrow
            .get(&account)
            .map(|held| *held)
            .unwrap_or_else(Amount::zero)
    }

    #[concordium_test]
    fn test_init() {
        let host = init_auction();
        let state = host.state();

        claim_eq!(
            state.deadline,
            Timestamp::from_timestamp_millis(DEADLINE),
            "Deadline should be the instantiation time plus the duration"
        );
        claim!(!state.ended, "A fresh auction should not be ended");
        claim!(state.history.is_empty(), "A fresh auction should have no bids");
        claim_eq!(state.winning, None);
        claim_eq!(state.config.operator, OPERATOR);
        claim_eq!(state.config.minimum_raise, Percentage::from_percent(5));
        claim_eq!(state.config.commission, Percentage::from_percent(2));
        claim_eq!(state.config.extension_window, Duration::from_minutes(10));
    }

    #[concordium_test]
    fn test_first_bid_must_be_positive() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        let result = bid(&mut host, &mut logger, ALICE, 0, START + 1);
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));
        claim!(host.state().history.is_empty(), "Rejected bid must not be recorded");
    }

    /// With a 5% minimum raise, a bid of 100 is accepted, 104 is rejected
    /// and 105 flips the winner.
    #[concordium_test]
    fn test_minimum_raise() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("First bid failed");
        claim_eq!(
            host.state().winning,
            Some(BidEntry {
                bidder: ALICE,
                amount: Amount::from_micro_ccd(100)
            })
        );

        let result = bid(&mut host, &mut logger, BOB, 104, START + 2);
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));
        claim_eq!(
            host.state().history.len(),
            1,
            "Rejected bid must not be recorded"
        );

        bid(&mut host, &mut logger, BOB, 105, START + 3).expect_report("Minimum raise bid failed");
        claim_eq!(
            host.state().winning,
            Some(BidEntry {
                bidder: BOB,
                amount: Amount::from_micro_ccd(105)
            })
        );
        claim_eq!(host.state().history.len(), 2);
        claim!(logger.logs.contains(&to_bytes(&AuctionEvent::Bid(BidEvent {
            bidder: BOB,
            amount: Amount::from_micro_ccd(105),
        }))));
    }

    #[concordium_test]
    fn test_early_bid_keeps_deadline() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("Bid failed");
        claim_eq!(
            host.state().deadline,
            Timestamp::from_timestamp_millis(DEADLINE),
            "A bid outside the extension window must not move the deadline"
        );
    }

    /// With a 600 s window, a bid arriving 100 s before the deadline pushes
    /// the deadline 600 s forward, i.e. 500 s past the old one.
    #[concordium_test]
    fn test_late_bid_extends_deadline() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, DEADLINE - 100_000)
            .expect_report("Late bid failed");
        claim_eq!(
            host.state().deadline,
            Timestamp::from_timestamp_millis(DEADLINE + WINDOW)
        );
    }

    /// Each late bid pushes the deadline by another full window.
    #[concordium_test]
    fn test_extension_compounds() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, DEADLINE - 1).expect_report("Late bid failed");
        claim_eq!(
            host.state().deadline,
            Timestamp::from_timestamp_millis(DEADLINE + WINDOW)
        );

        bid(&mut host, &mut logger, BOB, 105, DEADLINE + WINDOW - 1)
            .expect_report("Second late bid failed");
        claim_eq!(
            host.state().deadline,
            Timestamp::from_timestamp_millis(DEADLINE + 2 * WINDOW)
        );
    }

    #[concordium_test]
    fn test_bid_after_deadline_rejected() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        let result = bid(&mut host, &mut logger, ALICE, 100, DEADLINE);
        claim_eq!(result, Err(CustomContractError::AuctionNotActive.into()));
    }

    #[concordium_test]
    fn test_withdraw_excess_while_active() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        // Alice is outbid by Bob and raises again; her earlier escrow
        // becomes surplus above her latest bid.
        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("Bid failed");
        bid(&mut host, &mut logger, BOB, 200, START + 2).expect_report("Bid failed");
        bid(&mut host, &mut logger, ALICE, 400, START + 3).expect_report("Bid failed");
        claim_eq!(escrow_of(&host, ALICE), Amount::from_micro_ccd(500));

        host.set_self_balance(Amount::from_micro_ccd(700));
        let ctx = receive_ctx(ALICE, START + 4);
        contract_withdraw(&ctx, &mut host, &mut logger).expect_report("Withdraw failed");

        claim_eq!(
            escrow_of(&host, ALICE),
            Amount::from_micro_ccd(400),
            "Active withdrawal must leave exactly the latest bid escrowed"
        );
        claim_eq!(
            host.get_transfers(),
            [(ALICE, Amount::from_micro_ccd(100))]
        );
        claim!(logger.logs.contains(&to_bytes(&AuctionEvent::Withdraw(
            WithdrawEvent {
                account: ALICE,
                amount: Amount::from_micro_ccd(100),
            }
        ))));
    }

    #[concordium_test]
    fn test_withdraw_without_excess_rejected() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("Bid failed");

        let ctx = receive_ctx(ALICE, START + 2);
        let result = contract_withdraw(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NothingToWithdraw.into()));
        claim_eq!(
            escrow_of(&host, ALICE),
            Amount::from_micro_ccd(100),
            "Failed withdrawal must not touch the escrow"
        );
    }

    #[concordium_test]
    fn test_finalize_requires_operator() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("Bid failed");

        let ctx = receive_ctx(BOB, DEADLINE);
        let result = contract_finalize(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
    }

    #[concordium_test]
    fn test_finalize_before_deadline_rejected() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("Bid failed");

        let ctx = receive_ctx(OPERATOR, DEADLINE - 1);
        let result = contract_finalize(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::AuctionStillActive.into()));
        claim!(!host.state().ended, "Failed settlement must not end the auction");
    }

    #[concordium_test]
    fn test_finalize_without_bids_rejected() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        let ctx = receive_ctx(OPERATOR, DEADLINE);
        let result = contract_finalize(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NoBids.into()));
    }

    /// With a 2% commission and a winning bid of 1000, settlement pays 20 to
    /// the operator, refunds the losers and reports a net amount of 980.
    #[concordium_test]
    fn test_finalize_settles() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 500, START + 1).expect_report("Bid failed");
        bid(&mut host, &mut logger, BOB, 1_000, START + 2).expect_report("Bid failed");

        host.set_self_balance(Amount::from_micro_ccd(1_500));
        let ctx = receive_ctx(OPERATOR, DEADLINE);
        contract_finalize(&ctx, &mut host, &mut logger).expect_report("Finalize failed");

        claim!(host.state().ended, "Settlement must end the auction");
        claim_eq!(
            host.get_transfers(),
            [
                (OPERATOR, Amount::from_micro_ccd(20)),
                (ALICE, Amount::from_micro_ccd(500)),
            ]
        );
        claim_eq!(
            escrow_of(&host, ALICE),
            Amount::zero(),
            "Losing escrow must be zeroed on settlement"
        );
        claim_eq!(escrow_of(&host, BOB), Amount::from_micro_ccd(1_000));
        claim!(logger.logs.contains(&to_bytes(&AuctionEvent::Ended(
            EndedEvent {
                winner: BOB,
                amount: Amount::from_micro_ccd(980),
            }
        ))));
    }

    #[concordium_test]
    fn test_finalize_only_once() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("Bid failed");

        host.set_self_balance(Amount::from_micro_ccd(100));
        let ctx = receive_ctx(OPERATOR, DEADLINE);
        contract_finalize(&ctx, &mut host, &mut logger).expect_report("Finalize failed");

        let result = contract_finalize(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::AuctionAlreadyEnded.into()));
    }

    #[concordium_test]
    fn test_bid_after_settlement_rejected() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("Bid failed");

        host.set_self_balance(Amount::from_micro_ccd(100));
        let ctx = receive_ctx(OPERATOR, DEADLINE);
        contract_finalize(&ctx, &mut host, &mut logger).expect_report("Finalize failed");

        let result = bid(&mut host, &mut logger, BOB, 1_000, DEADLINE + 1);
        claim_eq!(result, Err(CustomContractError::AuctionNotActive.into()));
    }

    #[concordium_test]
    fn test_withdraw_after_settlement() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 500, START + 1).expect_report("Bid failed");
        bid(&mut host, &mut logger, BOB, 1_000, START + 2).expect_report("Bid failed");

        host.set_self_balance(Amount::from_micro_ccd(1_500));
        let ctx = receive_ctx(OPERATOR, DEADLINE);
        contract_finalize(&ctx, &mut host, &mut logger).expect_report("Finalize failed");

        // The winner's escrow is locked for good.
        let bob_ctx = receive_ctx(BOB, DEADLINE + 1);
        let result = contract_withdraw(&bob_ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::WinnerCannotWithdrawExcess.into())
        );

        // Losers were already refunded during settlement.
        let alice_ctx = receive_ctx(ALICE, DEADLINE + 1);
        let result = contract_withdraw(&alice_ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NothingToWithdraw.into()));
    }

    #[concordium_test]
    fn test_view_winner() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, BOB, 1_000, START + 1).expect_report("Bid failed");

        let ctx = receive_ctx(ALICE, START + 2);
        let result = contract_view_winner(&ctx, &host);
        claim_eq!(result, Err(CustomContractError::NotFinalized.into()));

        host.set_self_balance(Amount::from_micro_ccd(1_000));
        let operator_ctx = receive_ctx(OPERATOR, DEADLINE);
        contract_finalize(&operator_ctx, &mut host, &mut logger).expect_report("Finalize failed");

        let winner = contract_view_winner(&ctx, &host).expect_report("View winner failed");
        claim_eq!(
            winner,
            BidEntry {
                bidder: BOB,
                amount: Amount::from_micro_ccd(1_000)
            }
        );
    }

    /// The net winning amount can be redirected repeatedly; the ledger keeps
    /// no record of the payout.
    #[concordium_test]
    fn test_withdraw_main() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, BOB, 1_000, START + 1).expect_report("Bid failed");

        host.set_self_balance(Amount::from_micro_ccd(10_000));
        let finalize_ctx = receive_ctx(OPERATOR, DEADLINE);
        contract_finalize(&finalize_ctx, &mut host, &mut logger).expect_report("Finalize failed");

        let parameter_bytes = to_bytes(&DESTINATION);
        let mut ctx = receive_ctx(OPERATOR, DEADLINE + 1);
        ctx.set_parameter(&parameter_bytes);

        let mut bob_ctx = receive_ctx(BOB, DEADLINE + 1);
        bob_ctx.set_parameter(&parameter_bytes);
        let result = contract_withdraw_main(&bob_ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        contract_withdraw_main(&ctx, &mut host).expect_report("Main withdrawal failed");
        contract_withdraw_main(&ctx, &mut host).expect_report("Repeated main withdrawal failed");

        claim_eq!(
            host.get_transfers_to(DESTINATION),
            [
                Amount::from_micro_ccd(980),
                Amount::from_micro_ccd(980),
            ]
        );
    }

    #[concordium_test]
    fn test_withdraw_main_before_settlement_rejected() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, BOB, 1_000, START + 1).expect_report("Bid failed");

        let parameter_bytes = to_bytes(&DESTINATION);
        let mut ctx = receive_ctx(OPERATOR, START + 2);
        ctx.set_parameter(&parameter_bytes);
        let result = contract_withdraw_main(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::NotFinalized.into()));
    }

    /// While the auction is active, funds held always equal funds deposited
    /// minus funds paid out.
    #[concordium_test]
    fn test_conservation() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100_000, START + 1).expect_report("Bid failed");
        bid(&mut host, &mut logger, BOB, 200_000, START + 2).expect_report("Bid failed");
        bid(&mut host, &mut logger, ALICE, 400_000, START + 3).expect_report("Bid failed");
        let deposited = Amount::from_micro_ccd(700_000);

        host.set_self_balance(deposited);
        let ctx = receive_ctx(ALICE, START + 4);
        contract_withdraw(&ctx, &mut host, &mut logger).expect_report("Withdraw failed");

        let paid_out = host
            .get_transfers()
            .iter()
            .fold(Amount::zero(), |acc, (_, amount)| acc + *amount);
        let held = host
            .state()
            .escrow
            .iter()
            .fold(Amount::zero(), |acc, (_, amount)| acc + *amount);
        claim_eq!(held + paid_out, deposited);
    }

    #[concordium_test]
    fn test_view_history() {
        let mut host = init_auction();
        let mut logger = TestLogger::init();

        bid(&mut host, &mut logger, ALICE, 100, START + 1).expect_report("Bid failed");
        bid(&mut host, &mut logger, BOB, 105, START + 2).expect_report("Bid failed");
        bid(&mut host, &mut logger, ALICE, 200, START + 3).expect_report("Bid failed");

        let ctx = receive_ctx(ALICE, START + 4);
        let history = contract_view_history(&ctx, &host).expect_report("View history failed");
        claim_eq!(
            history,
            [
                BidEntry {
                    bidder: ALICE,
                    amount: Amount::from_micro_ccd(100)
                },
                BidEntry {
                    bidder: BOB,
                    amount: Amount::from_micro_ccd(105)
                },
                BidEntry {
                    bidder: ALICE,
                    amount: Amount::from_micro_ccd(200)
                },
            ]
        );
    }
}
