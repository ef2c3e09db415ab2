use dioxus::prelude::*;

use crate::{
    app::persist_display_settings,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::{
        format::{DisplaySettings, MAX_FRACTION_DIGITS, MIN_FRACTION_DIGITS},
        version,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let settings = use_context::<Signal<DisplaySettings>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let current = settings();
    let mut separator_input = use_signal(|| {
        if current.decimal_comma {
            "comma".to_string()
        } else {
            "dot".to_string()
        }
    });
    let mut digits_input = use_signal(|| current.max_fraction_digits.to_string());

    let on_apply = {
        let mut settings = settings.clone();
        let toasts = toasts.clone();
        move |_| {
            let parsed = parse_settings(separator_input(), digits_input());
            match parsed {
                Ok(next) => {
                    settings.set(next);
                    persist_display_settings(&settings);
                    push_toast(toasts.clone(), ToastKind::Success, "Updated display settings.");
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut settings = settings.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = DisplaySettings::default();
            separator_input.set(if defaults.decimal_comma {
                "comma".to_string()
            } else {
                "dot".to_string()
            });
            digits_input.set(defaults.max_fraction_digits.to_string());
            settings.set(defaults);
            persist_display_settings(&settings);
            push_toast(toasts.clone(), ToastKind::Info, "Restored default display settings.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Number Display" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Presentation only: how unit prices are printed. Parsing of what you type \
                     accepts both separators regardless of this setting."
                }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Decimal separator" }
                        select {
                            class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                            value: separator_input(),
                            onchange: move |evt| separator_input.set(evt.value()),
                            option { value: "comma", "Comma (1,25)" }
                            option { value: "dot", "Dot (1.25)" }
                        }
                    }
                    div {
                        label { class: "block text-xs font-semibold uppercase text-slate-500",
                            "Max fraction digits ({MIN_FRACTION_DIGITS}-{MAX_FRACTION_DIGITS})"
                        }
                        input {
                            class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                            inputmode: "numeric",
                            value: digits_input(),
                            oninput: move |evt| digits_input.set(evt.value()),
                        }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400", onclick: on_apply, "Apply" }
                    button { class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800", onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-slate-400",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p { class: "mt-2 text-sm", "{version::APP_NAME} {version::version_label()}" }
                p { class: "mt-1 text-xs text-slate-500",
                    "Comparisons are session-only; product rows are not saved between launches."
                }
            }
        }
    }
}

fn parse_settings(separator: String, digits: String) -> Result<DisplaySettings, String> {
    let decimal_comma = match separator.as_str() {
        "comma" => true,
        "dot" => false,
        other => return Err(format!("Unknown separator choice: {other}")),
    };
    let max_fraction_digits: u8 = digits
        .trim()
        .parse()
        .map_err(|_| "Fraction digits must be a whole number")?;
    if !(MIN_FRACTION_DIGITS..=MAX_FRACTION_DIGITS).contains(&max_fraction_digits) {
        return Err(format!(
            "Fraction digits must be between {MIN_FRACTION_DIGITS} and {MAX_FRACTION_DIGITS}"
        ));
    }

    Ok(DisplaySettings {
        decimal_comma,
        max_fraction_digits,
    })
}
