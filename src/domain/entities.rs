/// Store-lifetime identifier for a product row. Assigned monotonically and
/// never reused, even after the row is removed.
pub type RowId = u64;

/// One user-entered product candidate. Quantity and price stay raw strings so
/// the inputs can hold half-typed values like `"1,"`; parsing happens at
/// calculation time.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: RowId,
    pub name: String,
    pub quantity: String,
    pub price: String,
    /// Spreadsheet-style letter shown while the name input is empty. Fixed at
    /// creation time from the store's label counter.
    pub placeholder: String,
}

/// The editable fields of a [`ProductRow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowField {
    Name,
    Quantity,
    Price,
}

/// Derived calculation result for one row. Produced fresh on every
/// calculation pass and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct ComputedRow {
    pub id: RowId,
    /// Trimmed name, or the position-derived generated label when empty.
    pub label: String,
    pub quantity_value: f64,
    pub price_value: f64,
    pub is_valid: bool,
    pub unit_price: Option<f64>,
}

// Unparsed fields hold NaN, and two identical passes must still produce
// equal summaries, so the float fields compare by bit pattern.
impl PartialEq for ComputedRow {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.label == other.label
            && self.quantity_value.to_bits() == other.quantity_value.to_bits()
            && self.price_value.to_bits() == other.price_value.to_bits()
            && self.is_valid == other.is_valid
            && self.unit_price.map(f64::to_bits) == other.unit_price.map(f64::to_bits)
    }
}

/// Outcome of one calculation pass. Any accepted row mutation resets the
/// store's summary to [`Summary::Absent`].
#[derive(Clone, Debug, PartialEq)]
pub enum Summary {
    /// No calculation has run since the rows last changed.
    Absent,
    /// No row was valid; `message` tells the user how to fix the inputs.
    Error {
        rows: Vec<ComputedRow>,
        message: String,
    },
    /// At least one row was valid and `winner_id` names the cheapest one.
    Success {
        rows: Vec<ComputedRow>,
        winner_id: RowId,
        message: String,
    },
}

impl Summary {
    pub fn is_absent(&self) -> bool {
        matches!(self, Summary::Absent)
    }

    /// Computed rows of the last pass, empty when absent.
    pub fn rows(&self) -> &[ComputedRow] {
        match self {
            Summary::Absent => &[],
            Summary::Error { rows, .. } | Summary::Success { rows, .. } => rows,
        }
    }

    pub fn winner_id(&self) -> Option<RowId> {
        match self {
            Summary::Success { winner_id, .. } => Some(*winner_id),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Summary::Absent => None,
            Summary::Error { message, .. } | Summary::Success { message, .. } => Some(message),
        }
    }
}
