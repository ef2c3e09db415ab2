use dioxus::prelude::*;

/// Per-row validity marker shown after a calculation. `None` means the
/// summary is absent and nothing should be claimed about the row yet.
#[component]
pub fn ValidityBadge(state: Option<bool>) -> Element {
    let (label, color) = match state {
        Some(true) => (
            "OK",
            "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        ),
        Some(false) => (
            "Check inputs",
            "bg-rose-500/10 text-rose-300 border-rose-500/40",
        ),
        None => ("–", "bg-slate-700/40 text-slate-300 border-slate-600/60"),
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{label}"
        }
    }
}
