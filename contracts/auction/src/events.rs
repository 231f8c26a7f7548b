use commons::{BID_TAG, ENDED_TAG, WITHDRAW_TAG};
use concordium_std::*;

/// An untagged event for an accepted bid.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct BidEvent {
    /// Bidder account address.
    pub bidder: AccountAddress,
    /// Full bid amount.
    pub amount: Amount,
}

/// An untagged event for a withdrawal of escrowed funds.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct WithdrawEvent {
    /// Account the funds were released to.
    pub account: AccountAddress,
    /// Amount transferred out.
    pub amount: Amount,
}

/// An untagged event for auction settlement.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct EndedEvent {
    /// The auction winner.
    pub winner: AccountAddress,
    /// Winning amount net of the operator commission.
    pub amount: Amount,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum AuctionEvent {
    /// A bid was accepted.
    Bid(BidEvent),
    /// Escrowed funds were released.
    Withdraw(WithdrawEvent),
    /// The auction was settled.
    Ended(EndedEvent),
}

impl Serial for AuctionEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            AuctionEvent::Bid(event) => {
                out.write_u8(BID_TAG)?;
                event.serial(out)
            }
            AuctionEvent::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
            AuctionEvent::Ended(event) => {
                out.write_u8(ENDED_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for AuctionEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            BID_TAG => BidEvent::deserial(source).map(AuctionEvent::Bid),
            WITHDRAW_TAG => WithdrawEvent::deserial(source).map(AuctionEvent::Withdraw),
            ENDED_TAG => EndedEvent::deserial(source).map(AuctionEvent::Ended),
            _ => Err(ParseError::default()),
        }
    }
}
