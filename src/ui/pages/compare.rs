use std::collections::HashMap;

use dioxus::prelude::*;

use crate::{
    domain::{ComputedRow, RowField, RowId, RowStore},
    ui::components::{
        kpi_card::KpiCard,
        product_table::{ProductRowView, ProductTable},
        result_banner::ResultBanner,
    },
    util::format::{format_unit_price, DisplaySettings},
};

#[component]
pub fn ComparePage() -> Element {
    let store = use_context::<Signal<RowStore>>();
    let settings = use_context::<Signal<DisplaySettings>>();

    let rows = store.with(|st| st.rows().to_vec());
    let summary = store.with(|st| st.summary().clone());
    let can_remove = store.with(|st| st.can_remove());
    let display = settings();

    // Join raw rows with the computed rows of the last pass by id.
    let computed_lookup: HashMap<RowId, ComputedRow> = summary
        .rows()
        .iter()
        .map(|entry| (entry.id, entry.clone()))
        .collect();
    let winner_id = summary.winner_id();

    let row_views: Vec<ProductRowView> = rows
        .iter()
        .map(|row| {
            let computed = computed_lookup.get(&row.id);
            ProductRowView {
                id: row.id,
                name: row.name.clone(),
                quantity: row.quantity.clone(),
                price: row.price.clone(),
                placeholder: row.placeholder.clone(),
                unit_price: computed
                    .and_then(|entry| entry.unit_price)
                    .map(|value| format_unit_price(value, &display)),
                validity: computed.map(|entry| entry.is_valid),
                is_winner: winner_id == Some(row.id),
            }
        })
        .collect();

    let product_count = rows.len();
    let best_unit_price = winner_id
        .and_then(|id| computed_lookup.get(&id))
        .and_then(|entry| entry.unit_price)
        .map(|value| format_unit_price(value, &display))
        .unwrap_or_else(|| "–".to_string());

    let on_edit = {
        let mut store = store.clone();
        move |(id, field, value): (RowId, RowField, String)| {
            store.with_mut(|st| st.update_field(id, field, &value));
        }
    };

    let on_remove = {
        let mut store = store.clone();
        move |id: RowId| {
            store.with_mut(|st| st.remove_row(id));
        }
    };

    let on_add = {
        let mut store = store.clone();
        move |_| {
            store.with_mut(|st| st.add_row());
        }
    };

    let on_calculate = {
        let mut store = store.clone();
        move |_| {
            store.with_mut(|st| st.calculate());
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Products".to_string(),
                    value: product_count.to_string(),
                    description: Some("Rows in the comparison".to_string()),
                }
                KpiCard {
                    title: "Best price per unit".to_string(),
                    value: best_unit_price,
                    description: Some("From the last calculation".to_string()),
                }
                ResultBanner { summary: summary.clone() }
            }

            section {
                class: "space-y-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-sm font-semibold text-slate-200", "Products" }
                    div { class: "flex gap-3",
                        button {
                            class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800",
                            onclick: on_add,
                            "Add product"
                        }
                        button {
                            class: "rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400",
                            onclick: on_calculate,
                            "Calculate"
                        }
                    }
                }

                ProductTable {
                    rows: row_views,
                    can_remove,
                    on_edit,
                    on_remove,
                }

                p { class: "text-xs text-slate-500",
                    "Quantity and price accept digits with one decimal separator (comma or dot). \
                     Results go stale as soon as any row changes."
                }
            }
        }
    }
}
