use super::*;

/// The entry point a payment arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub enum EntryKind {
    Deposit,
    Fallback,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Total value received across all calls.
    pub received: Amount,
    /// Number of calls recorded.
    pub calls: u64,
    /// The entry point invoked last, if any.
    pub last_entry: Option<EntryKind>,
    pub phantom_data: PhantomData<S>,
}

/// Read-only snapshot of the receptor.
#[derive(Debug, Serialize, SchemaType)]
pub struct ViewResult {
    pub received: Amount,
    pub calls: u64,
    pub last_entry: Option<EntryKind>,
}

impl<S: HasStateApi> State<S> {
    pub fn empty() -> Self {
        Self {
            received: Amount::zero(),
            calls: 0,
            last_entry: None,
            phantom_data: PhantomData,
        }
    }

    /// Record a payment through the given entry point.
    pub fn record(&mut self, entry: EntryKind, amount: Amount) {
        self.received += amount;
        self.calls += 1;
        self.last_entry = Some(entry);
    }
}
