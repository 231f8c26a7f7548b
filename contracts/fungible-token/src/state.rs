use commons::{ContractError, ContractResult, ContractTokenAmount};
use concordium_std::*;
use core::ops::DerefMut;

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Number of tokens in circulation.
    pub total_supply: ContractTokenAmount,
    /// Token balance of each address.
    pub balances: StateMap<Address, ContractTokenAmount, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
}

impl<S: HasStateApi> State<S> {
    /// Create a new state with no tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            total_supply: 0u64.into(),
            balances: state_builder.new_map(),
            operators: state_builder.new_map(),
        }
    }

    pub fn balance_of(&self, address: &Address) -> ContractTokenAmount {
        self.balances
            .get(address)
            .map(|balance| *balance)
            .unwrap_or_else(|| 0u64.into())
    }

    /// Credit newly minted tokens to `owner` and grow the supply.
    pub fn mint(&mut self, owner: &Address, amount: ContractTokenAmount) {
        let mut balance = self.balances.entry(*owner).or_insert_with(|| 0u64.into());
        *balance += amount;
        drop(balance);
        self.total_supply += amount;
    }

    /// Remove tokens from `owner` and shrink the supply.
    pub fn burn(&mut self, owner: &Address, amount: ContractTokenAmount) -> ContractResult<()> {
        let mut balance = self.balances.entry(*owner).or_insert_with(|| 0u64.into());
        ensure!(*balance >= amount, ContractError::InsufficientFunds);
        *balance -= amount;
        drop(balance);
        self.total_supply -= amount;
        Ok(())
    }

    /// Move tokens between addresses without changing the supply.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: ContractTokenAmount,
    ) -> ContractResult<()> {
        let mut from_balance = self.balances.entry(*from).or_insert_with(|| 0u64.into());
        ensure!(*from_balance >= amount, ContractError::InsufficientFunds);
        *from_balance -= amount;
        drop(from_balance);

        let mut to_balance = self.balances.entry(*to).or_insert_with(|| 0u64.into());
        *to_balance += amount;

        Ok(())
    }

    /// Add a new operator for the given address.
    ///
    /// Succeeds even if the `operator` is already an operator for the
    /// `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Remove an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `owner`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if `address` is an operator for `owner`.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }
}
