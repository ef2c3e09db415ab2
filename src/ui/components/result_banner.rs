use dioxus::prelude::*;

use crate::domain::Summary;

/// Headline outcome of the last calculation: winner, corrective error text,
/// or a hint that the results are stale.
#[component]
pub fn ResultBanner(summary: Summary) -> Element {
    let (label, theme, text) = match &summary {
        Summary::Absent => (
            "Pending",
            "border-slate-700 bg-slate-900/40 text-slate-300",
            "Press Calculate to compare the current products.".to_string(),
        ),
        Summary::Error { message, .. } => (
            "No result",
            "border-rose-500/40 bg-rose-500/10 text-rose-200",
            message.clone(),
        ),
        Summary::Success { message, .. } => (
            "Best value",
            "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
            message.clone(),
        ),
    };

    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {theme}",
            span { class: "text-xs font-semibold uppercase tracking-wide", "{label}" }
            p { class: "mt-2 text-sm font-medium", "{text}" }
        }
    }
}
