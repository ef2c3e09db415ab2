use dioxus::prelude::*;

use crate::domain::{RowField, RowId};
use crate::ui::components::validity_badge::ValidityBadge;

/// Everything one table row needs: the raw inputs plus whatever the last
/// calculation derived for it.
#[derive(Clone, PartialEq)]
pub struct ProductRowView {
    pub id: RowId,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub placeholder: String,
    pub unit_price: Option<String>,
    pub validity: Option<bool>,
    pub is_winner: bool,
}

#[component]
pub fn ProductTable(
    rows: Vec<ProductRowView>,
    can_remove: bool,
    on_edit: EventHandler<(RowId, RowField, String)>,
    on_remove: EventHandler<RowId>,
) -> Element {
    rsx! {
        div {
            class: "overflow-hidden rounded-xl border border-slate-800 bg-slate-900/40",
            table {
                class: "min-w-full divide-y divide-slate-800 text-sm",
                thead {
                    class: "bg-slate-900/60 text-left tracking-wide text-slate-500",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Product" }
                        th { class: "px-4 py-3 font-medium", "Quantity" }
                        th { class: "px-4 py-3 font-medium", "Total price" }
                        th { class: "px-4 py-3 font-medium", "Price per unit" }
                        th { class: "px-4 py-3 font-medium", "Status" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: "divide-y divide-slate-800",
                    for row in rows {
                        ProductRowEditor {
                            row,
                            can_remove,
                            on_edit: on_edit.clone(),
                            on_remove: on_remove.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ProductRowEditorProps {
    row: ProductRowView,
    can_remove: bool,
    on_edit: EventHandler<(RowId, RowField, String)>,
    on_remove: EventHandler<RowId>,
}

#[component]
fn ProductRowEditor(props: ProductRowEditorProps) -> Element {
    let row = props.row;
    let row_class = if row.is_winner {
        "bg-emerald-500/10"
    } else {
        "hover:bg-slate-800/40"
    };
    let input_class = "w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm \
                       text-slate-100 focus:border-indigo-500 focus:outline-none";

    let id = row.id;
    let on_edit_name = props.on_edit.clone();
    let on_edit_quantity = props.on_edit.clone();
    let on_edit_price = props.on_edit.clone();
    let unit_price = row.unit_price.clone().unwrap_or_else(|| "–".to_string());

    let remove_class = if props.can_remove {
        "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase \
         tracking-wide text-rose-200 hover:bg-rose-500/10"
    } else {
        "rounded-md border border-slate-800 px-2 py-1 text-[10px] font-semibold uppercase \
         tracking-wide text-slate-600 cursor-not-allowed"
    };

    rsx! {
        tr {
            class: row_class,
            td {
                class: "px-4 py-3",
                input {
                    class: input_class,
                    value: row.name.clone(),
                    placeholder: row.placeholder.clone(),
                    oninput: move |evt| on_edit_name.call((id, RowField::Name, evt.value())),
                }
            }
            td {
                class: "px-4 py-3",
                input {
                    class: input_class,
                    inputmode: "decimal",
                    value: row.quantity.clone(),
                    placeholder: "e.g. 500",
                    oninput: move |evt| on_edit_quantity.call((id, RowField::Quantity, evt.value())),
                }
            }
            td {
                class: "px-4 py-3",
                input {
                    class: input_class,
                    inputmode: "decimal",
                    value: row.price.clone(),
                    placeholder: "e.g. 2,99",
                    oninput: move |evt| on_edit_price.call((id, RowField::Price, evt.value())),
                }
            }
            td {
                class: "px-4 py-3 font-medium text-slate-200",
                "{unit_price}"
            }
            td {
                class: "px-4 py-3",
                ValidityBadge { state: row.validity }
            }
            td {
                class: "px-4 py-3 text-right",
                button {
                    class: remove_class,
                    disabled: !props.can_remove,
                    onclick: move |_| props.on_remove.call(id),
                    "Remove"
                }
            }
        }
    }
}
