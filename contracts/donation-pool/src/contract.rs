use super::*;

/// Create a new pool that expires `lockup_minutes` after instantiation. The
/// instantiating account becomes the beneficiary.
#[init(contract = "DonationPool", parameter = "InitParams")]
fn contract_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;
    let expiry = ctx
        .metadata()
        .slot_time()
        .checked_add(Duration::from_minutes(params.lockup_minutes))
        .ok_or(CustomContractError::InvalidDuration)?;
    Ok(State::new(state_builder, ctx.init_origin(), expiry))
}

/// Donate the attached amount to the pool. Only allowed before the expiry.
#[receive(
    contract = "DonationPool",
    name = "donate",
    payable,
    mutable,
    enable_logger
)]
fn contract_donate<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let donor = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    host.state_mut()
        .donate(donor, amount, ctx.metadata().slot_time())?;

    // Event for the received donation.
    logger.log(&PoolEvent::Donate(DonateEvent { donor, amount }))?;

    Ok(())
}

/// Pay the accumulated pool to the beneficiary. Only allowed for the
/// beneficiary and only after the expiry. The total is zeroed before the
/// transfer is issued.
#[receive(contract = "DonationPool", name = "claim", mutable, enable_logger)]
fn contract_claim<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let beneficiary = host.state().beneficiary;
    ensure!(
        ctx.sender().matches_account(&beneficiary),
        CustomContractError::Unauthorized.into()
    );

    let payout = host.state_mut().claim(ctx.metadata().slot_time())?;

    // Event for the claim.
    logger.log(&PoolEvent::Claim(ClaimEvent {
        beneficiary,
        amount: payout,
    }))?;

    host.invoke_transfer(&beneficiary, payout)?;

    Ok(())
}

/// View the pool parameters and the unclaimed total.
#[receive(contract = "DonationPool", name = "view", return_value = "ViewResult")]
fn contract_view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewResult> {
    let state = host.state();
    Ok(ViewResult {
        beneficiary: state.beneficiary,
        expiry: state.expiry,
        total: state.total,
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const BENEFICIARY: AccountAddress = AccountAddress([0u8; 32]);
    const DONOR: AccountAddress = AccountAddress([1u8; 32]);

    const START: u64 = 1_000;
    const LOCKUP_MINUTES: u64 = 30;
    /// Expiry in milliseconds implied by `START` and `LOCKUP_MINUTES`.
    const EXPIRY: u64 = START + LOCKUP_MINUTES * 60_000;

    fn init_pool() -> TestHost<State<TestStateApi>> {
        let parameter_bytes = to_bytes(&InitParams {
            lockup_minutes: LOCKUP_MINUTES,
        });
        let mut ctx = TestInitContext::empty();
        ctx.set_parameter(&parameter_bytes);
        ctx.set_init_origin(BENEFICIARY);
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

    #[concordium_test]
    fn test_init() {
        let host = init_pool();
        let state = host.state();

        claim_eq!(state.beneficiary, BENEFICIARY);
        claim_eq!(state.expiry, Timestamp::from_timestamp_millis(EXPIRY));
        claim_eq!(state.total, Amount::zero());
    }

    #[concordium_test]
    fn test_donate_before_expiry() {
        let mut host = init_pool();
        let mut logger = TestLogger::init();

        let ctx = receive_ctx(DONOR, START + 1);
        contract_donate(&ctx, &mut host, Amount::from_micro_ccd(500), &mut logger)
            .expect_report("Donation failed");

        claim_eq!(host.state().total, Amount::from_micro_ccd(500));
        claim_eq!(
            host.state().donations.get(&DONOR).map(|given| *given),
            Some(Amount::from_micro_ccd(500))
        );
        claim!(logger.logs.contains(&to_bytes(&PoolEvent::Donate(DonateEvent {
            donor: DONOR,
            amount: Amount::from_micro_ccd(500),
        }))));
    }

    #[concordium_test]
    fn test_donate_after_expiry_rejected() {
        let mut host = init_pool();
        let mut logger = TestLogger::init();

        let ctx = receive_ctx(DONOR, EXPIRY);
        let result = contract_donate(&ctx, &mut host, Amount::from_micro_ccd(500), &mut logger);
        claim_eq!(result, Err(CustomContractError::PoolExpired.into()));
        claim_eq!(host.state().total, Amount::zero());
    }

    #[concordium_test]
    fn test_claim_before_expiry_rejected() {
        let mut host = init_pool();
        let mut logger = TestLogger::init();

        let ctx = receive_ctx(DONOR, START + 1);
        contract_donate(&ctx, &mut host, Amount::from_micro_ccd(500), &mut logger)
            .expect_report("Donation failed");

        let claim_ctx = receive_ctx(BENEFICIARY, EXPIRY - 1);
        let result = contract_claim(&claim_ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::PoolStillLocked.into()));
    }

    #[concordium_test]
    fn test_claim_requires_beneficiary() {
        let mut host = init_pool();
        let mut logger = TestLogger::init();

        let ctx = receive_ctx(DONOR, START + 1);
        contract_donate(&ctx, &mut host, Amount::from_micro_ccd(500), &mut logger)
            .expect_report("Donation failed");

        let claim_ctx = receive_ctx(DONOR, EXPIRY);
        let result = contract_claim(&claim_ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
    }

    #[concordium_test]
    fn test_claim_pays_out_once() {
        let mut host = init_pool();
        let mut logger = TestLogger::init();

        let ctx = receive_ctx(DONOR, START + 1);
        contract_donate(&ctx, &mut host, Amount::from_micro_ccd(500), &mut logger)
            .expect_report("Donation failed");

        host.set_self_balance(Amount::from_micro_ccd(500));
        let claim_ctx = receive_ctx(BENEFICIARY, EXPIRY);
        contract_claim(&claim_ctx, &mut host, &mut logger).expect_report("Claim failed");

        claim_eq!(
            host.get_transfers(),
            [(BENEFICIARY, Amount::from_micro_ccd(500))]
        );
        claim_eq!(host.state().total, Amount::zero());

        let result = contract_claim(&claim_ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NothingToWithdraw.into()));
    }
}
