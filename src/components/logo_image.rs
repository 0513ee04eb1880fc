//! Logo `<img>` with a placeholder fallback.

use leptos::prelude::*;

use crate::config::PLACEHOLDER_IMAGE;

/// Lazy-loaded logo image. If the asset can't be loaded the placeholder is
/// swapped in once and the error goes no further.
#[component]
pub fn LogoImage(src: String, alt: String, #[prop(optional)] class: &'static str) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <img
            class=class
            src=move || if failed.get() { PLACEHOLDER_IMAGE.to_string() } else { src.clone() }
            alt=alt
            loading="lazy"
            on:error=move |_| {
                if !failed.get_untracked() {
                    set_failed.set(true);
                }
            }
        />
    }
}
