//! Ordered product rows plus the cached result of the last calculation.

use super::entities::{ProductRow, RowField, RowId, Summary};
use super::labels::generate_label;
use super::numeric::is_partial_decimal;
use super::pricing;

/// The comparison needs at least two candidates; removals below this floor
/// are silently ignored.
pub const MIN_ROWS: usize = 2;

/// Holds the row sequence and mediates every mutation.
///
/// There is exactly one writer (the UI event loop) and each mutation either
/// applies fully and drops the cached summary, or leaves the store untouched.
/// Both counters only ever grow: ids are never reused, and the label counter
/// keeps advancing across removals, so a fresh row's placeholder may visibly
/// skip letters after add/remove cycles. That matches the shipped behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct RowStore {
    rows: Vec<ProductRow>,
    next_id: RowId,
    next_label_index: usize,
    summary: Summary,
}

impl Default for RowStore {
    fn default() -> Self {
        let mut store = Self {
            rows: Vec::new(),
            next_id: 1,
            next_label_index: 0,
            summary: Summary::Absent,
        };
        for _ in 0..MIN_ROWS {
            store.add_row();
        }
        store
    }
}

impl RowStore {
    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > MIN_ROWS
    }

    /// Appends an empty row with the next id and the next placeholder letter.
    pub fn add_row(&mut self) {
        let placeholder = generate_label(self.next_label_index);
        self.rows.push(ProductRow {
            id: self.next_id,
            name: String::new(),
            quantity: String::new(),
            price: String::new(),
            placeholder,
        });
        self.next_id += 1;
        self.next_label_index += 1;
        self.summary = Summary::Absent;
    }

    /// Removes the row with the given id unless that would drop the store
    /// below [`MIN_ROWS`]. Unknown ids and blocked removals are no-ops.
    pub fn remove_row(&mut self, id: RowId) {
        if self.rows.len() <= MIN_ROWS {
            return;
        }
        let Some(position) = self.rows.iter().position(|row| row.id == id) else {
            return;
        };
        self.rows.remove(position);
        self.summary = Summary::Absent;
    }

    /// Applies an edit to one field of one row.
    ///
    /// Quantity and price only accept values matching the partial-decimal
    /// pattern (digits with at most one `.` or `,`); anything else is
    /// discarded and the field keeps its prior value. Writing the value a
    /// field already holds changes nothing and keeps the summary alive.
    pub fn update_field(&mut self, id: RowId, field: RowField, value: &str) {
        if matches!(field, RowField::Quantity | RowField::Price) && !is_partial_decimal(value) {
            return;
        }
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return;
        };
        let target = match field {
            RowField::Name => &mut row.name,
            RowField::Quantity => &mut row.quantity,
            RowField::Price => &mut row.price,
        };
        if *target == value {
            return;
        }
        *target = value.to_string();
        self.summary = Summary::Absent;
    }

    /// Runs the pricing pass over the current rows and caches the result.
    pub fn calculate(&mut self) {
        self.summary = pricing::compute(&self.rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_values(values: &[(&str, &str)]) -> RowStore {
        let mut store = RowStore::default();
        for _ in store.rows().len()..values.len() {
            store.add_row();
        }
        let ids: Vec<_> = store.rows().iter().map(|row| row.id).collect();
        for (id, (quantity, price)) in ids.into_iter().zip(values) {
            store.update_field(id, RowField::Quantity, quantity);
            store.update_field(id, RowField::Price, price);
        }
        store
    }

    #[test]
    fn starts_with_the_minimum_row_count() {
        let store = RowStore::default();
        assert_eq!(store.rows().len(), MIN_ROWS);
        assert!(store.summary().is_absent());
        assert_eq!(store.rows()[0].placeholder, "A");
        assert_eq!(store.rows()[1].placeholder, "B");
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut store = RowStore::default();
        store.add_row();
        let removed_id = store.rows()[2].id;
        store.remove_row(removed_id);
        store.add_row();
        assert!(store.rows().iter().all(|row| row.id != removed_id));
        assert!(store.rows()[2].id > removed_id);
    }

    #[test]
    fn removal_is_blocked_at_the_floor() {
        let mut store = RowStore::default();
        store.calculate();
        let before = store.clone();
        let first_id = store.rows()[0].id;
        store.remove_row(first_id);
        assert_eq!(store, before);
    }

    #[test]
    fn removal_preserves_relative_order() {
        let mut store = RowStore::default();
        store.add_row();
        store.add_row();
        let ids: Vec<_> = store.rows().iter().map(|row| row.id).collect();
        store.remove_row(ids[1]);
        let remaining: Vec<_> = store.rows().iter().map(|row| row.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn placeholder_letters_skip_after_remove_and_add() {
        let mut store = RowStore::default();
        store.add_row(); // C
        let last_id = store.rows()[2].id;
        store.remove_row(last_id);
        store.add_row();
        // The label counter never rewinds, so the new row skips "C".
        assert_eq!(store.rows()[2].placeholder, "D");
    }

    #[test]
    fn malformed_numeric_input_is_discarded() {
        let mut store = RowStore::default();
        let id = store.rows()[0].id;
        store.update_field(id, RowField::Quantity, "12.3");
        store.update_field(id, RowField::Quantity, "12.3.4");
        assert_eq!(store.rows()[0].quantity, "12.3");
        store.update_field(id, RowField::Price, "9,99x");
        assert_eq!(store.rows()[0].price, "");
    }

    #[test]
    fn name_accepts_anything() {
        let mut store = RowStore::default();
        let id = store.rows()[0].id;
        store.update_field(id, RowField::Name, "Brand X (500g) — offer!");
        assert_eq!(store.rows()[0].name, "Brand X (500g) — offer!");
    }

    #[test]
    fn accepted_edits_invalidate_the_summary() {
        let mut store = store_with_values(&[("2", "10"), ("5", "20")]);
        store.calculate();
        assert!(!store.summary().is_absent());

        let id = store.rows()[0].id;
        store.update_field(id, RowField::Price, "11");
        assert!(store.summary().is_absent());
    }

    #[test]
    fn rejected_edits_and_noop_writes_keep_the_summary() {
        let mut store = store_with_values(&[("2", "10"), ("5", "20")]);
        store.calculate();

        let id = store.rows()[0].id;
        store.update_field(id, RowField::Quantity, "not a number");
        assert!(!store.summary().is_absent());
        store.update_field(id, RowField::Quantity, "2");
        assert!(!store.summary().is_absent());
        store.remove_row(9999);
        assert!(!store.summary().is_absent());
    }

    #[test]
    fn add_and_remove_invalidate_the_summary() {
        let mut store = store_with_values(&[("2", "10"), ("5", "20")]);
        store.calculate();
        store.add_row();
        assert!(store.summary().is_absent());

        store.calculate();
        let last_id = store.rows()[2].id;
        store.remove_row(last_id);
        assert!(store.summary().is_absent());
    }

    #[test]
    fn calculate_reflects_the_current_rows() {
        let mut store = store_with_values(&[("2", "10"), ("5", "20")]);
        store.calculate();
        let second_id = store.rows()[1].id;
        assert_eq!(store.summary().winner_id(), Some(second_id));
    }
}
