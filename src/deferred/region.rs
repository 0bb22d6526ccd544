use dioxus::prelude::*;

use crate::components::{
    skeleton::SkeletonCard,
    spinner::{Spinner, SpinnerSize},
};
use crate::utils::CCStr;

/// Shows a fallback view while any descendant of `children` is suspended,
/// then swaps to the real children once they are ready.
///
/// The readiness gate itself belongs to the framework (`use_resource` +
/// `suspend()` descendants); this component only decides what is displayed
/// meanwhile. Without an explicit `fallback` a centered [`Spinner`] is used.
///
/// `DeferredRegion` contributes no markup of its own: once children are
/// ready, the output is exactly what the children render. Render errors are
/// not handled here, they keep propagating to the nearest ancestor
/// `ErrorBoundary`.
#[component]
pub fn DeferredRegion(fallback: Option<Element>, children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: move |_| match fallback.clone() {
                Some(fallback) => fallback,
                None => rsx! {
                    div { class: "flex w-full justify-center p-8",
                        Spinner {}
                    }
                },
            },
            {children}
        }
    }
}

/// [`DeferredRegion`] preset for whole pages: a full-height centered spinner
/// with a status line underneath while the page content is pending.
#[component]
pub fn DeferredPage(status: Option<CCStr>, children: Element) -> Element {
    let status = status.unwrap_or_else(|| CCStr::from("Loading…"));
    rsx! {
        DeferredRegion {
            fallback: rsx! {
                div { class: "hero min-h-[50vh]",
                    div { class: "hero-content flex-col text-center gap-4",
                        Spinner { size: SpinnerSize::Xl }
                        p { class: "text-base-content/70", {status} }
                    }
                }
            },
            {children}
        }
    }
}

/// [`DeferredRegion`] preset for card-shaped content: a [`SkeletonCard`]
/// keeps the layout in place while the real card is pending.
#[component]
pub fn DeferredCard(children: Element) -> Element {
    rsx! {
        DeferredRegion {
            fallback: rsx! {
                SkeletonCard {}
            },
            {children}
        }
    }
}
