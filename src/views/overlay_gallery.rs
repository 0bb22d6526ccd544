use crate::prelude::*;

use crate::utils::{async_sleep, CCStr};

#[component]
pub fn OverlayGalleryView() -> Element {
    log::debug!("OverlayGalleryView Rendered");

    let mut busy = use_signal(|| false);
    let mut saved_count = use_signal(|| 0u32);

    let submit = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            async_sleep(1500).await;
            saved_count += 1;
            busy.set(false);
        });
    };

    use_drop(|| log::debug!("OverlayGalleryView Dropped"));

    rsx! {
        super::TitledView {
            title: CCStr::from("Loading overlay"),
            subtitle: CCStr::from("Children stay mounted; a busy flag layers a blurred spinner on top."),
            div { class: "container mx-auto max-w-xl flex flex-col gap-6",
                LoadingOverlay {
                    loading: busy(),
                    message: CCStr::from("Saving…"),
                    class: CCStr::from("rounded-box"),
                    div {
                        class: "card bg-base-100 shadow-xl",
                        // Keep chord navigation from firing while typing in the form.
                        onkeydown: move |event| event.stop_propagation(),
                        div { class: "card-body gap-4",
                            h2 { class: "card-title", "Profile" }
                            input {
                                r#type: "text",
                                name: "display_name",
                                class: "input input-bordered w-full",
                                placeholder: "Display name",
                            }
                            textarea {
                                name: "bio",
                                class: "textarea textarea-bordered w-full",
                                placeholder: "Short bio",
                            }
                            div { class: "card-actions justify-end",
                                button { class: "btn btn-primary", onclick: submit, "Save" }
                            }
                        }
                    }
                }
                if saved_count() > 0 {
                    p { class: "text-sm text-base-content/60 text-center", "Saved {saved_count} time(s)." }
                }
            }
        }
    }
}
