//! Decision core: row state and the price-per-unit comparison.

pub mod entities;
pub mod labels;
pub mod numeric;
pub mod pricing;
pub mod row_store;

#[allow(unused_imports)]
pub use entities::{ComputedRow, ProductRow, RowField, RowId, Summary};
#[allow(unused_imports)]
pub use labels::generate_label;
#[allow(unused_imports)]
pub use numeric::{is_partial_decimal, to_number};
#[allow(unused_imports)]
pub use pricing::{compute, NO_VALID_ROW_MESSAGE};
#[allow(unused_imports)]
pub use row_store::{RowStore, MIN_ROWS};
