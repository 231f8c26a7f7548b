use super::*;

/// An untagged event for value received through `deposit`.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct DepositEvent {
    /// Address the value came from.
    pub sender: Address,
    /// Received amount.
    pub amount: Amount,
}

/// An untagged event for value received through `fallback`.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct FallbackEvent {
    /// Address the value came from.
    pub sender: Address,
    /// Received amount.
    pub amount: Amount,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum ReceptorEvent {
    /// Value arrived through `deposit`.
    Deposit(DepositEvent),
    /// Value arrived through `fallback`.
    Fallback(FallbackEvent),
}

impl Serial for ReceptorEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            ReceptorEvent::Deposit(event) => {
                out.write_u8(DEPOSIT_TAG)?;
                event.serial(out)
            }
            ReceptorEvent::Fallback(event) => {
                out.write_u8(FALLBACK_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for ReceptorEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            DEPOSIT_TAG => DepositEvent::deserial(source).map(ReceptorEvent::Deposit),
            FALLBACK_TAG => FallbackEvent::deserial(source).map(ReceptorEvent::Fallback),
            _ => Err(ParseError::default()),
        }
    }
}
