//! Logo tile: thumbnail, name and a one-line caption.

use leptos::prelude::*;
use logodeck_core::LogoRecord;

use crate::app::AppContext;
use crate::components::LogoImage;
use crate::config::repo_links;
use crate::utils::format::format_record_meta;

stylance::import_crate_style!(css, "src/components/gallery/logo_card.module.css");

/// Clicking (or Enter/Space) opens the detail modal.
#[component]
pub fn LogoCard(record: LogoRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let src = repo_links().raw_url(&record.path);
    let meta = format_record_meta(&record);
    let name = record.name.clone();
    let family = record.family.clone();
    let title = record.path.clone();

    let record_for_click = record.clone();
    let on_click = move |_: leptos::ev::MouseEvent| ctx.open(record_for_click.clone());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            ctx.open(record.clone());
        }
    };

    view! {
        <article
            class=css::card
            role="button"
            tabindex="0"
            title=title
            on:click=on_click
            on:keydown=on_keydown
        >
            <div class=css::thumb>
                <LogoImage src=src alt=name.clone() class=css::image />
            </div>
            <div class=css::body>
                <h3 class=css::name>{name}</h3>
                <p class=css::family>{family}</p>
                <p class=css::meta>{meta}</p>
            </div>
        </article>
    }
}
