use super::*;

/// An untagged event for a received donation.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct DonateEvent {
    /// Donor account address.
    pub donor: AccountAddress,
    /// Donated amount.
    pub amount: Amount,
}

/// An untagged event for a claim of the pool.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct ClaimEvent {
    /// Account the pool was paid to.
    pub beneficiary: AccountAddress,
    /// Claimed amount.
    pub amount: Amount,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum PoolEvent {
    /// A donation was received.
    Donate(DonateEvent),
    /// The pool was claimed.
    Claim(ClaimEvent),
}

impl Serial for PoolEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            PoolEvent::Donate(event) => {
                out.write_u8(DONATE_TAG)?;
                event.serial(out)
            }
            PoolEvent::Claim(event) => {
                out.write_u8(CLAIM_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for PoolEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            DONATE_TAG => DonateEvent::deserial(source).map(PoolEvent::Donate),
            CLAIM_TAG => ClaimEvent::deserial(source).map(PoolEvent::Claim),
            _ => Err(ParseError::default()),
        }
    }
}
