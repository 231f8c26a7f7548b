use commons::*;
use concordium_cis2::*;
use concordium_std::*;

use crate::external::*;
use crate::state::*;

/// Initialize the token contract with an empty ledger and no supply.
#[init(contract = "FungibleToken")]
fn contract_init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::empty(state_builder))
}

/// Mint tokens to the given address. Only the contract owner can mint.
#[receive(
    contract = "FungibleToken",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn contract_mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        ctx.sender().matches_account(&ctx.owner()),
        ContractError::Unauthorized
    );

    let params: MintParams = ctx.parameter_cursor().get()?;
    host.state_mut().mint(&params.owner, params.amount);

    logger.log(&Cis2Event::<ContractTokenId, ContractTokenAmount>::Mint(
        MintEvent {
            token_id: TOKEN_ID,
            amount: params.amount,
            owner: params.owner,
        },
    ))?;

    Ok(())
}

/// Burn tokens from the sender's own balance.
#[receive(
    contract = "FungibleToken",
    name = "burn",
    parameter = "BurnParams",
    mutable,
    enable_logger
)]
fn contract_burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: BurnParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    host.state_mut().burn(&sender, params.amount)?;

    logger.log(&Cis2Event::<ContractTokenId, ContractTokenAmount>::Burn(
        BurnEvent {
            token_id: TOKEN_ID,
            amount: params.amount,
            owner: sender,
        },
    ))?;

    Ok(())
}

/// Execute a list of token transfers. Each transfer must be sent by the
/// owner of the tokens or one of their operators. Only account receivers are
/// supported.
#[receive(
    contract = "FungibleToken",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn contract_transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    for Transfer {
        token_id,
        amount,
        from,
        to,
        data: _,
    } in transfers
    {
        ensure!(
            from == sender || host.state().is_operator(&from, &sender),
            ContractError::Unauthorized
        );

        let to_address = match to {
            Receiver::Account(address) => Address::Account(address),
            Receiver::Contract(..) => bail!(CustomContractError::Unsupported.into()),
        };

        host.state_mut().transfer(&from, &to_address, amount)?;

        logger.log(&Cis2Event::<ContractTokenId, ContractTokenAmount>::Transfer(
            TransferEvent {
                token_id,
                amount,
                from,
                to: to_address,
            },
        ))?;
    }

    Ok(())
}

/// Add or remove operators of the sender.
#[receive(
    contract = "FungibleToken",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn contract_update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let (state, state_builder) = host.state_and_builder();

    for param in params {
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Query the balances of a list of addresses.
#[receive(
    contract = "FungibleToken",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn contract_balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        response.push(host.state().balance_of(&query.address));
    }
    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Query whether the given addresses are operators of the given owners.
#[receive(
    contract = "FungibleToken",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn contract_operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        response.push(host.state().is_operator(&query.owner, &query.address));
    }
    Ok(OperatorOfQueryResponse::from(response))
}

/// View the number of tokens in circulation.
#[receive(
    contract = "FungibleToken",
    name = "viewSupply",
    return_value = "ContractTokenAmount"
)]
fn contract_view_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractTokenAmount> {
    Ok(host.state().total_supply)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0u8; 32]);
    const ALICE: AccountAddress = AccountAddress([1u8; 32]);
    const BOB: AccountAddress = AccountAddress([2u8; 32]);

    const ALICE_ADDR: Address = Address::Account(ALICE);
    const BOB_ADDR: Address = Address::Account(BOB);

    fn init_token() -> TestHost<State<TestStateApi>> {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();
        let state = contract_init(&ctx, &mut state_builder).expect_report("Init failed");
        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: Address) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx.set_owner(OWNER);
        ctx
    }

    fn mint(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        sender: AccountAddress,
        owner: Address,
        amount: u64,
    ) -> ContractResult<()> {
        let parameter_bytes = to_bytes(&MintParams {
            owner,
            amount: ContractTokenAmount::from(amount),
        });
        let mut ctx = receive_ctx(Address::Account(sender));
        ctx.set_parameter(&parameter_bytes);
        contract_mint(&ctx, host, logger)
    }

    #[concordium_test]
    fn test_init() {
        let host = init_token();
        claim_eq!(host.state().total_supply, ContractTokenAmount::from(0));
    }

    #[concordium_test]
    fn test_mint() {
        let mut host = init_token();
        let mut logger = TestLogger::init();

        mint(&mut host, &mut logger, OWNER, ALICE_ADDR, 400).expect_report("Mint failed");

        claim_eq!(
            host.state().balance_of(&ALICE_ADDR),
            ContractTokenAmount::from(400)
        );
        claim_eq!(host.state().total_supply, ContractTokenAmount::from(400));
        claim!(logger.logs.contains(&to_bytes(&Cis2Event::<
            ContractTokenId,
            ContractTokenAmount,
        >::Mint(MintEvent {
            token_id: TOKEN_ID,
            amount: ContractTokenAmount::from(400),
            owner: ALICE_ADDR,
        }))));
    }

    #[concordium_test]
    fn test_mint_requires_owner() {
        let mut host = init_token();
        let mut logger = TestLogger::init();

        let result = mint(&mut host, &mut logger, ALICE, ALICE_ADDR, 400);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(host.state().total_supply, ContractTokenAmount::from(0));
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = init_token();
        let mut logger = TestLogger::init();

        mint(&mut host, &mut logger, OWNER, ALICE_ADDR, 400).expect_report("Mint failed");

        let parameter_bytes = to_bytes(&TransferParams::from(vec![Transfer {
            token_id: TOKEN_ID,
            amount: ContractTokenAmount::from(100),
            from: ALICE_ADDR,
            to: Receiver::Account(BOB),
            data: AdditionalData::empty(),
        }]));
        let mut ctx = receive_ctx(ALICE_ADDR);
        ctx.set_parameter(&parameter_bytes);
        contract_transfer(&ctx, &mut host, &mut logger).expect_report("Transfer failed");

        claim_eq!(
            host.state().balance_of(&ALICE_ADDR),
            ContractTokenAmount::from(300)
        );
        claim_eq!(
            host.state().balance_of(&BOB_ADDR),
            ContractTokenAmount::from(100)
        );
        claim_eq!(host.state().total_supply, ContractTokenAmount::from(400));
    }

    #[concordium_test]
    fn test_transfer_insufficient_funds() {
        let mut host = init_token();
        let mut logger = TestLogger::init();

        mint(&mut host, &mut logger, OWNER, ALICE_ADDR, 400).expect_report("Mint failed");

        let parameter_bytes = to_bytes(&TransferParams::from(vec![Transfer {
            token_id: TOKEN_ID,
            amount: ContractTokenAmount::from(500),
            from: ALICE_ADDR,
            to: Receiver::Account(BOB),
            data: AdditionalData::empty(),
        }]));
        let mut ctx = receive_ctx(ALICE_ADDR);
        ctx.set_parameter(&parameter_bytes);
        let result = contract_transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::InsufficientFunds));
    }

    #[concordium_test]
    fn test_transfer_requires_owner_or_operator() {
        let mut host = init_token();
        let mut logger = TestLogger::init();

        mint(&mut host, &mut logger, OWNER, ALICE_ADDR, 400).expect_report("Mint failed");

        let parameter_bytes = to_bytes(&TransferParams::from(vec![Transfer {
            token_id: TOKEN_ID,
            amount: ContractTokenAmount::from(100),
            from: ALICE_ADDR,
            to: Receiver::Account(BOB),
            data: AdditionalData::empty(),
        }]));
        let mut ctx = receive_ctx(BOB_ADDR);
        ctx.set_parameter(&parameter_bytes);
        let result = contract_transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));
    }

    #[concordium_test]
    fn test_operator_transfer() {
        let mut host = init_token();
        let mut logger = TestLogger::init();

        mint(&mut host, &mut logger, OWNER, ALICE_ADDR, 400).expect_report("Mint failed");

        let update_bytes = to_bytes(&UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: BOB_ADDR,
        }]));
        let mut update_ctx = receive_ctx(ALICE_ADDR);
        update_ctx.set_parameter(&update_bytes);
        contract_update_operator(&update_ctx, &mut host, &mut logger)
            .expect_report("Operator update failed");
        claim!(host.state().is_operator(&ALICE_ADDR, &BOB_ADDR));

        let parameter_bytes = to_bytes(&TransferParams::from(vec![Transfer {
            token_id: TOKEN_ID,
            amount: ContractTokenAmount::from(100),
            from: ALICE_ADDR,
            to: Receiver::Account(BOB),
            data: AdditionalData::empty(),
        }]));
        let mut ctx = receive_ctx(BOB_ADDR);
        ctx.set_parameter(&parameter_bytes);
        contract_transfer(&ctx, &mut host, &mut logger).expect_report("Operator transfer failed");

        claim_eq!(
            host.state().balance_of(&BOB_ADDR),
            ContractTokenAmount::from(100)
        );
    }

    #[concordium_test]
    fn test_burn() {
        let mut host = init_token();
        let mut logger = TestLogger::init();

        mint(&mut host, &mut logger, OWNER, ALICE_ADDR, 400).expect_report("Mint failed");

        let parameter_bytes = to_bytes(&BurnParams {
            amount: ContractTokenAmount::from(150),
        });
        let mut ctx = receive_ctx(ALICE_ADDR);
        ctx.set_parameter(&parameter_bytes);
        contract_burn(&ctx, &mut host, &mut logger).expect_report("Burn failed");

        claim_eq!(
            host.state().balance_of(&ALICE_ADDR),
            ContractTokenAmount::from(250)
        );
        claim_eq!(host.state().total_supply, ContractTokenAmount::from(250));

        let over_bytes = to_bytes(&BurnParams {
            amount: ContractTokenAmount::from(1_000),
        });
        let mut over_ctx = receive_ctx(ALICE_ADDR);
        over_ctx.set_parameter(&over_bytes);
        let result = contract_burn(&over_ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::InsufficientFunds));
    }

    #[concordium_test]
    fn test_balance_of_query() {
        let mut host = init_token();
        let mut logger = TestLogger::init();

        mint(&mut host, &mut logger, OWNER, ALICE_ADDR, 400).expect_report("Mint failed");

        let parameter_bytes = to_bytes(&BalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: TOKEN_ID,
                    address: ALICE_ADDR,
                },
                BalanceOfQuery {
                    token_id: TOKEN_ID,
                    address: BOB_ADDR,
                },
            ],
        });
        let mut ctx = receive_ctx(ALICE_ADDR);
        ctx.set_parameter(&parameter_bytes);
        let response = contract_balance_of(&ctx, &host).expect_report("Query failed");
        claim_eq!(
            response.0,
            [
                ContractTokenAmount::from(400),
                ContractTokenAmount::from(0)
            ]
        );
    }
}
