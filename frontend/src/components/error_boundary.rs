//! Error boundaries for the page layout and for single listing panels.

use dioxus::prelude::*;

const ERROR_BOX: &str = "border: 1px solid #B42318; border-radius: 8px; padding: 10px; margin: 12px;";

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("{} boundary caught: {:?}", boundary_name, err);
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; padding: 24px;",
                        h1 { style: "color:#B42318; font-size: 40px; {ERROR_BOX}", "Something went wrong" }
                        p { style: "color:#7A271A; font-size: 18px; {ERROR_BOX}", "Boundary: {boundary_name}" }
                        div {
                            style: "display: flex; gap: 12px; margin: 12px;",
                            a { href: "/", style: "color:#8C3B1F; font-size: 18px;", "Home" }
                            a { href: "/shop", style: "color:#8C3B1F; font-size: 18px;", "Back to the shop" }
                        }
                        pre { style: "color:#1F1A17; text-wrap: auto; {ERROR_BOX}", "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:#8C3B1F; background: white; font-size: 16px; cursor: pointer; {ERROR_BOX}",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            h2 { style: "color:#B42318; font-size: 24px; margin: 8px;", "Could not load this section" }
            pre {
                style: "color:#7A271A; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto; {ERROR_BOX}",
                "{error_txt}"
            }
            {children}
        }
    }
}
