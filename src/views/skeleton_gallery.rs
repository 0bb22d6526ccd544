use crate::prelude::*;

use crate::utils::CCStr;

#[component]
pub fn SkeletonGalleryView() -> Element {
    log::debug!("SkeletonGalleryView Rendered");

    let mut simulate = use_signal(|| true);

    use_drop(|| log::debug!("SkeletonGalleryView Dropped"));

    rsx! {
        super::TitledView {
            title: CCStr::from("Skeletons"),
            subtitle: CCStr::from("Placeholder shapes that keep the layout in place while content loads."),
            div { class: "container mx-auto flex flex-col gap-6",
                label { class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        name: "simulate",
                        class: "toggle toggle-primary",
                        checked: simulate(),
                        oninput: move |event| simulate.set(event.checked()),
                    }
                    span { "Simulate pending content" }
                }
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                    ShapePreview { label: "Card",
                        if simulate() {
                            SkeletonCard {}
                        } else {
                            SampleCard {}
                        }
                    }
                    ShapePreview { label: "Text block",
                        if simulate() {
                            SkeletonText { lines: 4 }
                        } else {
                            SampleParagraph {}
                        }
                    }
                    ShapePreview { label: "List",
                        if simulate() {
                            SkeletonList { rows: 3 }
                        } else {
                            SampleList {}
                        }
                    }
                    ShapePreview { label: "Table",
                        if simulate() {
                            SkeletonTable { rows: 3, cols: 4 }
                        } else {
                            SampleTable {}
                        }
                    }
                    ShapePreview { label: "Free-form block",
                        if simulate() {
                            Skeleton { class: CCStr::from("h-24 w-full") }
                        } else {
                            SampleBlock {}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ShapePreview(label: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "flex flex-col gap-3",
            div { class: "text-sm font-bold uppercase text-base-content/60", {label} }
            div { class: "p-4 border border-base-300 rounded-box", {children} }
        }
    }
}

#[component]
fn SampleCard() -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body gap-4",
                div { class: "flex items-center gap-4",
                    div { class: "avatar avatar-placeholder",
                        div { class: "bg-neutral text-neutral-content size-12 rounded-full",
                            span { "DU" }
                        }
                    }
                    div {
                        div { class: "font-bold", "Deferred UI" }
                        div { class: "text-sm text-base-content/70", "component kit" }
                    }
                }
                p {
                    "Cards keep their silhouette while loading thanks to the matching
                    skeleton preset, so nothing jumps when the data lands."
                }
            }
        }
    }
}

#[component]
fn SampleParagraph() -> Element {
    rsx! {
        p {
            "Text blocks swap a stack of gray bars for the real copy. The last bar
            is shortened on purpose, paragraphs rarely end on a full line."
        }
    }
}

#[component]
fn SampleList() -> Element {
    rsx! {
        ul { class: "flex flex-col gap-4",
            for (initials , name , role) in [
                ("AL", "Ada Lovelace", "Analytical engines"),
                ("GH", "Grace Hopper", "Compilers"),
                ("KJ", "Katherine Johnson", "Trajectories"),
            ]
            {
                li { class: "flex items-center gap-4",
                    div { class: "avatar avatar-placeholder",
                        div { class: "bg-neutral text-neutral-content size-12 rounded-full",
                            span { {initials} }
                        }
                    }
                    div {
                        div { class: "font-bold", {name} }
                        div { class: "text-sm text-base-content/70", {role} }
                    }
                }
            }
        }
    }
}

#[component]
fn SampleBlock() -> Element {
    rsx! {
        div { class: "h-24 w-full rounded-box bg-neutral text-neutral-content flex items-center justify-center",
            "Any block-shaped content"
        }
    }
}

#[component]
fn SampleTable() -> Element {
    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "Component" }
                    th { "Kind" }
                    th { "Fallback" }
                    th { "State" }
                }
            }
            tbody {
                tr {
                    td { "DeferredCard" }
                    td { "region" }
                    td { "skeleton card" }
                    td { "ready" }
                }
                tr {
                    td { "DeferredPage" }
                    td { "region" }
                    td { "spinner + status" }
                    td { "ready" }
                }
                tr {
                    td { "LoadingOverlay" }
                    td { "overlay" }
                    td { "blurred spinner" }
                    td { "idle" }
                }
            }
        }
    }
}
