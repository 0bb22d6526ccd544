use dioxus::prelude::*;

use crate::components::skeleton::SkeletonText;
use crate::utils::CCStr;

use super::overlay::LoadingOverlay;
use super::region::{DeferredCard, DeferredPage, DeferredRegion};
use super::wrap::with_deferred_load;

fn render_once(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Suspends on a resource that never resolves, so the region around it stays
/// pending for the whole test.
#[component]
fn NeverReady() -> Element {
    let gate = use_resource(|| async move { std::future::pending::<()>().await });
    gate.suspend()?;
    rsx! {
        p { "never shown" }
    }
}

#[test]
fn region_renders_children_when_ready() {
    fn app() -> Element {
        rsx! {
            DeferredRegion {
                p { "all done" }
            }
        }
    }
    let html = render_once(app);
    assert!(html.contains("all done"));
    assert!(!html.contains("loading-spinner"));
}

#[test]
fn region_adds_no_markup_of_its_own() {
    fn wrapped() -> Element {
        rsx! {
            DeferredRegion {
                p { "all done" }
            }
        }
    }
    fn bare() -> Element {
        rsx! {
            p { "all done" }
        }
    }
    assert_eq!(render_once(wrapped), render_once(bare));
}

#[test]
fn region_shows_default_spinner_while_pending() {
    fn app() -> Element {
        rsx! {
            DeferredRegion {
                NeverReady {}
            }
        }
    }
    let html = render_once(app);
    assert!(html.contains("loading-spinner"));
    assert!(!html.contains("never shown"));
}

#[test]
fn region_prefers_the_supplied_fallback() {
    fn app() -> Element {
        rsx! {
            DeferredRegion {
                fallback: rsx! {
                    p { "hold on" }
                },
                NeverReady {}
            }
        }
    }
    let html = render_once(app);
    assert!(html.contains("hold on"));
    assert!(!html.contains("loading-spinner"));
    assert!(!html.contains("never shown"));
}

#[test]
fn page_preset_shows_spinner_and_status_line() {
    fn app() -> Element {
        rsx! {
            DeferredPage { status: CCStr::from("Crunching numbers…"),
                NeverReady {}
            }
        }
    }
    let html = render_once(app);
    assert!(html.contains("loading-spinner"));
    assert!(html.contains("Crunching numbers…"));
    assert!(!html.contains("never shown"));
}

#[test]
fn page_preset_has_a_default_status() {
    fn app() -> Element {
        rsx! {
            DeferredPage {
                NeverReady {}
            }
        }
    }
    assert!(render_once(app).contains("Loading…"));
}

#[test]
fn card_preset_falls_back_to_a_skeleton() {
    fn app() -> Element {
        rsx! {
            DeferredCard {
                NeverReady {}
            }
        }
    }
    let html = render_once(app);
    assert!(html.contains("skeleton"));
    assert!(!html.contains("never shown"));
}

#[tokio::test]
async fn region_swaps_to_children_once_ready() {
    #[component]
    fn QuickReady() -> Element {
        let word = use_resource(|| async move { "morning" });
        let word = word.suspend()?;
        rsx! {
            p { "the word is {word}" }
        }
    }
    fn app() -> Element {
        rsx! {
            DeferredRegion {
                QuickReady {}
            }
        }
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom.wait_for_suspense().await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("the word is morning"));
    assert!(!html.contains("loading-spinner"));
}

#[test]
fn overlay_hidden_when_not_loading() {
    fn app() -> Element {
        rsx! {
            LoadingOverlay { loading: false,
                p { "form content" }
            }
        }
    }
    let html = render_once(app);
    assert!(html.contains("form content"));
    assert!(!html.contains("loading-spinner"));
    assert!(!html.contains("backdrop-blur"));
}

#[test]
fn overlay_layers_spinner_and_message_over_children() {
    fn app() -> Element {
        rsx! {
            LoadingOverlay { loading: true, message: CCStr::from("Saving…"),
                p { "form content" }
            }
        }
    }
    let html = render_once(app);
    assert!(html.contains("form content"));
    assert!(html.contains("loading-spinner"));
    assert!(html.contains("Saving…"));
}

#[test]
fn overlay_without_message_shows_only_the_spinner() {
    fn app() -> Element {
        rsx! {
            LoadingOverlay { loading: true,
                p { "form content" }
            }
        }
    }
    let html = render_once(app);
    assert!(html.contains("loading-spinner"));
    assert!(!html.contains("text-sm font-medium"));
}

#[derive(Props, Clone, PartialEq)]
struct GreetingProps {
    name: CCStr,
}

#[allow(non_snake_case)]
fn Greeting(GreetingProps { name }: GreetingProps) -> Element {
    rsx! {
        p { "Hello {name}" }
    }
}

#[test]
fn wrapped_component_passes_props_through() {
    fn wrapped() -> Element {
        let greet = with_deferred_load(Greeting, None);
        greet(GreetingProps {
            name: CCStr::from("Ada"),
        })
    }
    let direct = {
        let mut dom = VirtualDom::new_with_props(
            Greeting,
            GreetingProps {
                name: CCStr::from("Ada"),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    };
    let html = render_once(wrapped);
    assert!(html.contains("Hello Ada"));
    assert_eq!(html, direct);
}

#[derive(Props, Clone, PartialEq)]
struct StalledProps {
    label: CCStr,
}

#[allow(non_snake_case)]
fn Stalled(StalledProps { label }: StalledProps) -> Element {
    let gate = use_resource(|| async move { std::future::pending::<()>().await });
    gate.suspend()?;
    rsx! {
        p { "{label}" }
    }
}

#[test]
fn wrapped_component_uses_the_fallback_renderer_while_pending() {
    fn app() -> Element {
        let stalled = with_deferred_load(
            Stalled,
            Some(|| {
                rsx! {
                    SkeletonText { lines: 2 }
                }
            }),
        );
        stalled(StalledProps {
            label: CCStr::from("real content"),
        })
    }
    let html = render_once(app);
    assert!(html.contains("skeleton"));
    assert!(!html.contains("real content"));
}

#[test]
fn identical_inputs_render_identically() {
    fn app() -> Element {
        rsx! {
            LoadingOverlay { loading: true, message: CCStr::from("Saving…"),
                p { "form content" }
            }
        }
    }
    assert_eq!(render_once(app), render_once(app));

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert_eq!(dioxus_ssr::render(&dom), dioxus_ssr::render(&dom));
}
