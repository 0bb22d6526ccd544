use crate::prelude::*;

use crate::{
    components::svg::{DrawSvg, Reload},
    utils::{async_sleep, CCStr},
};

#[component]
pub fn DeferredGalleryView() -> Element {
    log::debug!("DeferredGalleryView Rendered");

    // Bumping the epoch remounts every keyed region below, which re-runs
    // their resources from scratch.
    let mut epoch = use_signal(|| 0u32);

    use_drop(|| log::debug!("DeferredGalleryView Dropped"));

    rsx! {
        super::TitledView {
            title: CCStr::from("Deferred regions"),
            subtitle: CCStr::from("Fallback views while content is pending, swapped out once it is ready."),
            div { class: "container mx-auto flex flex-col gap-8",
                div { class: "flex justify-end",
                    button {
                        class: "btn btn-outline btn-primary",
                        onclick: move |_| { epoch += 1; },
                        DrawSvg::<Reload> {}
                        "Reload everything"
                    }
                }
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                    DeferredCard { key: "notes-{epoch}", ReleaseNotesCard {} }
                    DeferredRegion {
                        key: "stats-{epoch}",
                        fallback: rsx! {
                            SkeletonTable { rows: 3, cols: 2 }
                        },
                        SessionCountersPanel {}
                    }
                }
                WrappedChangelog { key: "changelog-{epoch}" }
            }
        }
    }
}

#[component]
fn ReleaseNotesCard() -> Element {
    let notes = use_resource(|| async move {
        async_sleep(1800).await;
        vec![
            ("0.3.0", "Deferred pages and cards"),
            ("0.2.1", "Overlay blur on busy forms"),
            ("0.2.0", "Skeleton table and list presets"),
        ]
    });
    let notes = notes.suspend()?;

    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body",
                h2 { class: "card-title", "Release notes" }
                ul { class: "flex flex-col gap-2",
                    for (version , summary) in notes.cloned() {
                        li { class: "flex flex-row items-baseline gap-3",
                            span { class: "badge badge-primary badge-outline font-mono", {version} }
                            span { {summary} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionCountersPanel() -> Element {
    let counters = use_resource(|| async move {
        async_sleep(900).await;
        [
            ("Regions mounted", 12u64),
            ("Overlays shown", 47),
            ("Placeholders drawn", 361),
        ]
    });
    let counters = counters.suspend()?;

    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body",
                h2 { class: "card-title", "Session counters" }
                table { class: "table",
                    tbody {
                        for (label , value) in counters.cloned() {
                            tr {
                                td { {label} }
                                td { class: "text-right font-mono", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChangelogPanelProps {
    pub entry_count: usize,
}

#[allow(non_snake_case)]
pub fn ChangelogPanel(ChangelogPanelProps { entry_count }: ChangelogPanelProps) -> Element {
    let entries = use_resource(move || async move {
        async_sleep(2500).await;
        (0..entry_count)
            .map(|i| format!("Merged change #{}", 128 - i))
            .collect::<Vec<_>>()
    });
    let entries = entries.suspend()?;

    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body",
                h2 { class: "card-title", "Recent changes" }
                ul { class: "list-disc list-inside",
                    for entry in entries.cloned() {
                        li { {entry} }
                    }
                }
            }
        }
    }
}

/// [ChangelogPanel] rendered through [with_deferred_load], with a text
/// skeleton instead of the default spinner while it is pending.
#[component]
fn WrappedChangelog() -> Element {
    let changelog = use_hook(|| {
        with_deferred_load(
            ChangelogPanel,
            Some(|| {
                rsx! {
                    SkeletonText { lines: 5 }
                }
            }),
        )
    });

    rsx! {
        {changelog(ChangelogPanelProps { entry_count: 5 })}
    }
}
