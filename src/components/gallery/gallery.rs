//! Searchable card grid.

use leptos::prelude::*;
use leptos_icons::Icon;
use logodeck_core::{Command, Outcome};

use crate::app::AppContext;
use crate::components::gallery::{FilterBar, LogoCard};
use crate::components::icons as ic;
use crate::utils::dom;
use crate::utils::format::format_result_summary;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn GalleryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let visible = Memo::new(move |_| ctx.gallery.with(|g| g.visible().to_vec()));
    let total = Memo::new(move |_| ctx.gallery.with(|g| g.total()));
    let has_more = Memo::new(move |_| ctx.gallery.with(|g| g.has_more()));

    // Keyboard focus follows the first newly revealed card once it renders.
    let load_more = move |_| {
        if let Some(Outcome::Appended(page)) = ctx.dispatch(Command::LoadMore)
            && let Some(index) = page.first_added()
        {
            let selector = format!(".{} > :nth-child({})", css::grid, index + 1);
            request_animation_frame(move || {
                dom::focus_element(&selector);
            });
        }
    };

    view! {
        <section class=css::gallery>
            <FilterBar />

            <p class=css::summary aria-live="polite">
                {move || format_result_summary(visible.with(Vec::len), total.get())}
            </p>

            <Show
                when=move || (total.get() > 0)
                fallback=|| view! {
                    <div class=css::empty>
                        <span class=css::emptyIcon><Icon icon=ic::FILE_IMAGE /></span>
                        <p>"No logos match your filters."</p>
                    </div>
                }
            >
                <div class=css::grid>
                    <For
                        each=move || visible.get()
                        key=|record| record.path.clone()
                        children=move |record| view! { <LogoCard record=record /> }
                    />
                </div>
            </Show>

            <Show when=move || has_more.get()>
                <div class=css::more>
                    <button
                        class=css::moreButton
                        on:click=load_more
                    >
                        "Load more"
                    </button>
                </div>
            </Show>
        </section>
    }
}
