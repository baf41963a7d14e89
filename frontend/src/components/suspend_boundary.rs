//! Suspense wrapper with a loading placeholder.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus a per-panel error boundary.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_: SuspenseContext| rsx! { LoadingIndicator {} },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 100%;
                padding: 32px 0;
                color: #6B7280;
                font-size: 16px;
            ",
            "Loading..."
        }
    }
}
