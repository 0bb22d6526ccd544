use dioxus::prelude::*;

use crate::components::spinner::{Spinner, SpinnerSize};
use crate::utils::CCStr;

/// Layers a busy indicator over its children while `loading` is set.
///
/// The children always render and keep their layout; when `loading` is true
/// an overlay covering the same area blurs them and shows a spinner plus the
/// optional `message`. Output is a pure function of the props: no flag, no
/// overlay node at all.
///
/// Unlike [`DeferredRegion`](super::region::DeferredRegion) this component
/// never suspends anything. The flag is owned by the caller, typically a
/// signal driven by a spawned task.
#[component]
pub fn LoadingOverlay(
    loading: bool,
    message: Option<CCStr>,
    class: Option<CCStr>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        div { class: "relative {class}",
            {children}
            if loading {
                div { class: "absolute inset-0 z-30 flex flex-col items-center justify-center gap-3 bg-base-100/60 backdrop-blur-sm",
                    Spinner { size: SpinnerSize::Lg }
                    if let Some(message) = message {
                        p { class: "text-sm font-medium text-base-content/80", {message} }
                    }
                }
            }
        }
    }
}
