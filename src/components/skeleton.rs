//! Placeholder shapes shown while real content is pending.
//!
//! All of these are stateless: they render the requested number of animated
//! blocks and nothing else. Counts are not validated, a zero count simply
//! renders nothing.

use dioxus::prelude::*;

use crate::utils::CCStr;

/// Base animated block. Extra classes are appended after the base class so
/// callers can size and round it.
#[component]
pub fn Skeleton(class: Option<CCStr>) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        div { class: "skeleton {class}" }
    }
}

#[component]
pub fn SkeletonAvatar() -> Element {
    rsx! {
        div { class: "skeleton size-12 shrink-0 rounded-full" }
    }
}

/// Stack of text-line bars, the last one shortened.
#[component]
pub fn SkeletonText(lines: usize) -> Element {
    rsx! {
        div { class: "flex flex-col gap-2",
            for i in 0..lines {
                div { class: if i + 1 == lines { "skeleton h-3 w-2/3" } else { "skeleton h-3 w-full" } }
            }
        }
    }
}

/// Card-shaped placeholder: avatar row, title and subtitle bars, body lines.
///
/// Also the fallback visual of
/// [`DeferredCard`](crate::deferred::region::DeferredCard).
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body gap-4",
                div { class: "flex items-center gap-4",
                    SkeletonAvatar {}
                    div { class: "flex flex-col gap-2",
                        div { class: "skeleton h-4 w-32" }
                        div { class: "skeleton h-3 w-20" }
                    }
                }
                SkeletonText { lines: 3 }
            }
        }
    }
}

#[component]
pub fn SkeletonList(rows: usize) -> Element {
    rsx! {
        div { class: "flex flex-col gap-4",
            for _ in 0..rows {
                div { class: "flex items-center gap-4",
                    SkeletonAvatar {}
                    div { class: "flex flex-col gap-2 grow",
                        div { class: "skeleton h-4 w-1/3" }
                        div { class: "skeleton h-3 w-full" }
                    }
                }
            }
        }
    }
}

/// Header bar row plus a `rows` × `cols` cell grid.
#[component]
pub fn SkeletonTable(rows: usize, cols: usize) -> Element {
    rsx! {
        div {
            class: "grid gap-3",
            style: "grid-template-columns: repeat({cols}, minmax(0, 1fr));",
            for _ in 0..cols {
                div { class: "skeleton h-4 w-1/2" }
            }
            for _ in 0..rows * cols {
                div { class: "skeleton h-4 w-full" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use crate::utils::CCStr;

    use super::*;

    fn render_once(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn text_repeats_one_bar_per_line() {
        fn app() -> Element {
            rsx! {
                SkeletonText { lines: 4 }
            }
        }
        assert_eq!(render_once(app).matches("skeleton").count(), 4);
    }

    #[test]
    fn zero_lines_render_no_bars() {
        fn app() -> Element {
            rsx! {
                SkeletonText { lines: 0 }
            }
        }
        assert!(!render_once(app).contains("skeleton"));
    }

    #[test]
    fn list_repeats_avatar_rows() {
        fn app() -> Element {
            rsx! {
                SkeletonList { rows: 3 }
            }
        }
        // avatar + title bar + text bar per row
        assert_eq!(render_once(app).matches("skeleton").count(), 9);
    }

    #[test]
    fn table_renders_header_and_cell_grid() {
        fn app() -> Element {
            rsx! {
                SkeletonTable { rows: 3, cols: 4 }
            }
        }
        // one header bar per column plus rows × cols cells
        assert_eq!(render_once(app).matches("skeleton").count(), 16);
    }

    #[test]
    fn base_block_merges_extra_classes() {
        fn app() -> Element {
            rsx! {
                Skeleton { class: CCStr::from("h-24 w-full rounded-box") }
            }
        }
        let html = render_once(app);
        assert!(html.contains("skeleton h-24 w-full rounded-box"));
    }
}
