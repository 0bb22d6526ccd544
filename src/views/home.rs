use crate::prelude::*;

use crate::{
    utils::{async_sleep, CCStr},
    views::GalleryLinkButton,
    Route,
};

#[component]
pub fn HomeView() -> Element {
    log::debug!("HomeView Rendered");

    use_drop(|| log::debug!("HomeView Dropped"));

    rsx! {
        DeferredPage { status: CCStr::from("Loading the overview…"),
            super::TitledView {
                title: CCStr::from("Deferred UI"),
                subtitle: CCStr::from(
                    "Loading-state components: deferred regions, overlays and skeletons.",
                ),
                WorkspaceSummary {}
                div { class: "container mx-auto mt-8 grid grid-cols-1 md:grid-cols-3 gap-6",
                    GalleryLinkButton {
                        route: Route::DeferredGalleryView {},
                        label: CCStr::from("Deferred regions"),
                        description: CCStr::from(
                            "Fallback views while content is pending, swapped once ready.",
                        ),
                    }
                    GalleryLinkButton {
                        route: Route::OverlayGalleryView {},
                        label: CCStr::from("Loading overlay"),
                        description: CCStr::from(
                            "A blurred spinner layered over children while a flag is set.",
                        ),
                    }
                    GalleryLinkButton {
                        route: Route::SkeletonGalleryView {},
                        label: CCStr::from("Skeletons"),
                        description: CCStr::from("Placeholder shapes that keep the layout in place."),
                    }
                }
            }
        }
    }
}

/// Suspends briefly so the whole overview goes through the page fallback.
#[component]
fn WorkspaceSummary() -> Element {
    let counters = use_resource(|| async move {
        async_sleep(600).await;
        [
            ("Components", 11usize),
            ("Gallery views", 3),
            ("Keyboard shortcuts", 6),
        ]
    });
    let counters = counters.suspend()?;

    rsx! {
        div { class: "container mx-auto stats shadow w-full",
            for (label , value) in counters.cloned() {
                div { class: "stat place-items-center",
                    div { class: "stat-title", {label} }
                    div { class: "stat-value", "{value}" }
                }
            }
        }
    }
}
