//! The comparison pass: validity checks, unit prices and winner selection.

use super::entities::{ComputedRow, ProductRow, Summary};
use super::labels::generate_label;
use super::numeric::to_number;

/// Shown when not a single row passes validation.
pub const NO_VALID_ROW_MESSAGE: &str =
    "Enter a quantity greater than zero and a valid price for at least one product.";

/// Evaluates all rows and picks the cheapest one per unit.
///
/// Pure and total: never fails, never touches the store. Output rows keep the
/// input order, one [`ComputedRow`] per input row. Ties on unit price go to
/// the earliest row (the scan only replaces the running best on a strictly
/// smaller value).
pub fn compute(rows: &[ProductRow]) -> Summary {
    let mut computed = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let trimmed = row.name.trim();
        let label = if trimmed.is_empty() {
            generate_label(index)
        } else {
            trimmed.to_string()
        };

        let quantity_value = to_number(&row.quantity);
        let price_value = to_number(&row.price);
        let is_valid = quantity_value.is_finite()
            && quantity_value > 0.0
            && price_value.is_finite()
            && price_value >= 0.0;
        let unit_price = is_valid.then(|| price_value / quantity_value);

        computed.push(ComputedRow {
            id: row.id,
            label,
            quantity_value,
            price_value,
            is_valid,
            unit_price,
        });
    }

    let mut winner: Option<&ComputedRow> = None;
    for entry in &computed {
        let Some(unit_price) = entry.unit_price else {
            continue;
        };
        let better = match winner.and_then(|best| best.unit_price) {
            Some(best) => unit_price < best,
            None => true,
        };
        if better {
            winner = Some(entry);
        }
    }

    match winner {
        Some(best) => {
            let winner_id = best.id;
            let message = format!("{} has the best price per unit.", best.label);
            Summary::Success {
                rows: computed,
                winner_id,
                message,
            }
        }
        None => Summary::Error {
            rows: computed,
            message: NO_VALID_ROW_MESSAGE.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RowId;

    fn row(id: RowId, name: &str, quantity: &str, price: &str) -> ProductRow {
        ProductRow {
            id,
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
            placeholder: String::new(),
        }
    }

    #[test]
    fn picks_the_lowest_unit_price() {
        let rows = vec![row(1, "", "2", "10"), row(2, "", "5", "20")];
        let summary = compute(&rows);

        assert_eq!(summary.winner_id(), Some(2));
        let computed = summary.rows();
        assert_eq!(computed[0].unit_price, Some(5.0));
        assert_eq!(computed[1].unit_price, Some(4.0));
    }

    #[test]
    fn output_matches_input_length_and_order() {
        let rows = vec![
            row(7, "Oats", "1", "2"),
            row(9, "", "0", ""),
            row(11, "Rice", "4", "5"),
        ];
        let summary = compute(&rows);
        let ids: Vec<_> = summary.rows().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![7, 9, 11]);
    }

    #[test]
    fn earliest_row_wins_ties() {
        let rows = vec![
            row(1, "", "2", "4"),
            row(2, "", "4", "8"),
            row(3, "", "1", "2"),
        ];
        let summary = compute(&rows);
        assert_eq!(summary.winner_id(), Some(1));
    }

    #[test]
    fn labels_fall_back_to_generated_letters() {
        let rows = vec![row(1, "  ", "1", "1"), row(2, " Milk ", "1", "2")];
        let summary = compute(&rows);
        let computed = summary.rows();
        assert_eq!(computed[0].label, "A");
        assert_eq!(computed[1].label, "Milk");
    }

    #[test]
    fn success_message_names_the_winner() {
        let rows = vec![row(1, "Bulk pack", "10", "5"), row(2, "", "1", "5")];
        let summary = compute(&rows);
        assert_eq!(
            summary.message(),
            Some("Bulk pack has the best price per unit.")
        );
    }

    #[test]
    fn zero_quantity_rows_are_invalid() {
        let rows = vec![row(1, "", "0", "10"), row(2, "", "0", "20")];
        let summary = compute(&rows);

        assert!(matches!(summary, Summary::Error { .. }));
        assert_eq!(summary.winner_id(), None);
        assert_eq!(summary.message(), Some(NO_VALID_ROW_MESSAGE));
        assert!(summary.rows().iter().all(|entry| !entry.is_valid));
    }

    #[test]
    fn negative_price_is_invalid_but_zero_price_is_not() {
        let rows = vec![row(1, "", "2", "-1"), row(2, "", "2", "0")];
        let summary = compute(&rows);
        let computed = summary.rows();

        assert!(!computed[0].is_valid);
        assert!(computed[1].is_valid);
        assert_eq!(summary.winner_id(), Some(2));
        assert_eq!(computed[1].unit_price, Some(0.0));
    }

    #[test]
    fn invalid_rows_do_not_abort_the_pass() {
        let rows = vec![row(1, "", "abc", "1"), row(2, "", "2", "3")];
        let summary = compute(&rows);

        assert_eq!(summary.winner_id(), Some(2));
        assert!(!summary.rows()[0].is_valid);
        assert!(summary.rows()[0].unit_price.is_none());
    }

    #[test]
    fn compute_is_idempotent() {
        let rows = vec![row(1, "Flour", "2,5", "3"), row(2, "", "1", "1,1")];
        assert_eq!(compute(&rows), compute(&rows));
    }

    #[test]
    fn compute_is_idempotent_with_unparsed_fields() {
        // Empty and garbage inputs parse to NaN; identical passes must still
        // compare equal.
        let rows = vec![
            row(1, "", "", ""),
            row(2, "", "abc", "1"),
            row(3, "", "2", "10"),
        ];
        assert_eq!(compute(&rows), compute(&rows));

        let all_unparsed = vec![row(1, "", "", ""), row(2, "", "", "")];
        assert_eq!(compute(&all_unparsed), compute(&all_unparsed));
    }
}
