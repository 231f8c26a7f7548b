use super::*;

/// Initialize the receptor with nothing received.
#[init(contract = "PaymentReceptor")]
fn contract_init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    _state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::empty())
}

/// Accept the attached amount and record that `deposit` was invoked.
#[receive(
    contract = "PaymentReceptor",
    name = "deposit",
    payable,
    mutable,
    enable_logger
)]
fn contract_deposit<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    host.state_mut().record(EntryKind::Deposit, amount);

    // Event for the received value.
    logger.log(&ReceptorEvent::Deposit(DepositEvent {
        sender: ctx.sender(),
        amount,
    }))?;

    Ok(())
}

/// Accept the attached amount and record that `fallback` was invoked.
#[receive(
    contract = "PaymentReceptor",
    name = "fallback",
    payable,
    mutable,
    enable_logger
)]
fn contract_fallback<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    host.state_mut().record(EntryKind::Fallback, amount);

    // Event for the received value.
    logger.log(&ReceptorEvent::Fallback(FallbackEvent {
        sender: ctx.sender(),
        amount,
    }))?;

    Ok(())
}

/// View the running totals and the entry point invoked last.
#[receive(contract = "PaymentReceptor", name = "view", return_value = "ViewResult")]
fn contract_view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewResult> {
    let state = host.state();
    Ok(ViewResult {
        received: state.received,
        calls: state.calls,
        last_entry: state.last_entry,
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const SENDER: AccountAddress = AccountAddress([1u8; 32]);

    fn init_receptor() -> TestHost<State<TestStateApi>> {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();
        let state = contract_init(&ctx, &mut state_builder).expect_report("Init failed");
        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: AccountAddress) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender));
        ctx
    }

    #[concordium_test]
    fn test_init() {
        let host = init_receptor();
        let state = host.state();

        claim_eq!(state.received, Amount::zero());
        claim_eq!(state.calls, 0);
        claim_eq!(state.last_entry, None);
    }

    #[concordium_test]
    fn test_deposit_records_entry() {
        let mut host = init_receptor();
        let mut logger = TestLogger::init();

        let ctx = receive_ctx(SENDER);
        contract_deposit(&ctx, &mut host, Amount::from_micro_ccd(250), &mut logger)
            .expect_report("Deposit failed");

        let state = host.state();
        claim_eq!(state.received, Amount::from_micro_ccd(250));
        claim_eq!(state.calls, 1);
        claim_eq!(state.last_entry, Some(EntryKind::Deposit));
        claim!(logger.logs.contains(&to_bytes(&ReceptorEvent::Deposit(
            DepositEvent {
                sender: Address::Account(SENDER),
                amount: Amount::from_micro_ccd(250),
            }
        ))));
    }

    #[concordium_test]
    fn test_fallback_records_entry() {
        let mut host = init_receptor();
        let mut logger = TestLogger::init();

        let ctx = receive_ctx(SENDER);
        contract_deposit(&ctx, &mut host, Amount::from_micro_ccd(250), &mut logger)
            .expect_report("Deposit failed");
        contract_fallback(&ctx, &mut host, Amount::from_micro_ccd(100), &mut logger)
            .expect_report("Fallback failed");

        let state = host.state();
        claim_eq!(state.received, Amount::from_micro_ccd(350));
        claim_eq!(state.calls, 2);
        claim_eq!(state.last_entry, Some(EntryKind::Fallback));
    }
}
