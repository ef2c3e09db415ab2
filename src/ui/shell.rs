use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version;

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 px-6 py-4 backdrop-blur",
                div { class: "mx-auto flex max-w-5xl items-center justify-between gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight", "{version::APP_NAME}" }
                        p { class: "text-xs text-slate-500", "Which pack is actually the cheapest?" }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Compare {}),
                            onclick: move |_| { nav.push(Route::Compare {}); },
                            label: "Compare",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "Settings",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-5xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 \
         font-semibold text-indigo-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition \
         hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
