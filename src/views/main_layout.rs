use crate::prelude::*;

use crate::{
    components::{
        misc::TextTooltip,
        shortcuts::ShortcutsModal,
        svg::{DrawSvg, Keyboard, SvgSize::Size8},
    },
    utils::CCStr,
    Route,
};

#[component]
pub fn MainLayout() -> Element {
    log::debug!("MainLayout reload");

    let mut show_shortcuts = use_signal(|| false);
    let mut chord_pending = use_signal(|| false);

    // "G" arms a two-key chord, anything else disarms it.
    let handle_keys = move |event: KeyboardEvent| {
        let key = event.key().to_string();
        let chord = chord_pending();
        chord_pending.set(false);
        match key.as_str() {
            "?" => show_shortcuts.set(true),
            "Escape" => show_shortcuts.set(false),
            "g" | "G" if !chord => chord_pending.set(true),
            "h" | "H" if chord => {
                navigator().push(Route::HomeView {});
            }
            "d" | "D" if chord => {
                navigator().push(Route::DeferredGalleryView {});
            }
            "o" | "O" if chord => {
                navigator().push(Route::OverlayGalleryView {});
            }
            "k" | "K" if chord => {
                navigator().push(Route::SkeletonGalleryView {});
            }
            _ => {}
        }
    };

    use_drop(|| log::debug!("MainLayout Dropped"));

    rsx! {
        div {
            class: "relative min-h-dvh",
            tabindex: "-1",
            autofocus: true,
            onkeydown: handle_keys,
            header { class: "bg-base-100 fixed top-0 w-full z-20 shadow-lg shadow-base-content/10",
                NavBar { show_shortcuts }
            }
            main { class: "pt-16 pb-16 mx-8", Outlet::<Route> {} }
            footer { class: "absolute bottom-px w-full h-12 px-8 z-0",
                div { class: "h-px border-t border-solid border-gray-500" }
                Footer {}
            }

            ShortcutsModal { is_open: show_shortcuts }
        }
    }
}

#[component]
fn NavBar(show_shortcuts: Signal<bool>) -> Element {
    log::debug!("NavBar reload");

    use_drop(|| log::debug!("NavBar Dropped"));

    rsx! {
        nav { class: "h-12 px-2 flex flex-row gap-2",
            div { class: "h-full content-center flex-none",
                div { class: "text-lg font-black text-nowrap", "Deferred UI" }
            }
            div { class: "basis-10" }
            NavLink { route: Route::HomeView {}, "Overview" }
            NavLink { route: Route::DeferredGalleryView {}, "Deferred" }
            NavLink { route: Route::OverlayGalleryView {}, "Overlay" }
            NavLink { route: Route::SkeletonGalleryView {}, "Skeletons" }
            div { class: "grow" }
            TextTooltip { tooltip_text: CCStr::from("Keyboard shortcuts (?)"),
                button {
                    class: "btn btn-ghost btn-circle self-center",
                    onclick: move |_| *show_shortcuts.write() = true,
                    DrawSvg::<Keyboard> { size: Size8 }
                }
            }
        }
    }
}

#[component]
fn NavLink(route: Route, children: Element) -> Element {
    rsx! {
        div { class: "basis-10 content-center flex",
            Link {
                class: "h-full px-4 content-center text-lg text-nowrap font-bold uppercase hover:bg-primary/10",
                active_class: "bg-primary/10 text-primary",
                to: route,
                {children}
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        div { class: "h-full text-primary text-right content-center", "Deferred UI gallery" }
    }
}
