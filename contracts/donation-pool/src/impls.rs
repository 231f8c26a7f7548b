use super::*;

impl<S: HasStateApi> State<S> {
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        beneficiary: AccountAddress,
        expiry: Timestamp,
    ) -> Self {
        Self {
            beneficiary,
            expiry,
            total: Amount::zero(),
            donations: state_builder.new_map(),
        }
    }

    /// Record a donation. Only allowed before the expiry.
    pub fn donate(
        &mut self,
        donor: AccountAddress,
        amount: Amount,
        slot_time: Timestamp,
    ) -> Result<(), CustomContractError> {
        ensure!(slot_time < self.expiry, CustomContractError::PoolExpired);

        let mut given = self.donations.entry(donor).or_insert(Amount::zero());
        *given += amount;
        drop(given);
        self.total += amount;

        Ok(())
    }

    /// Book the claim and return the amount to transfer. The total is zeroed
    /// here, before any transfer is issued.
    pub fn claim(&mut self, slot_time: Timestamp) -> Result<Amount, CustomContractError> {
        ensure!(slot_time >= self.expiry, CustomContractError::PoolStillLocked);
        ensure!(
            self.total > Amount::zero(),
            CustomContractError::NothingToWithdraw
        );

        let payout = self.total;
        self.total = Amount::zero();
        Ok(payout)
    }
}
