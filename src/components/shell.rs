//! Application shell: header, view switch and the load-state gate.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::browser::FolderBrowser;
use crate::components::gallery::GalleryView;
use crate::components::icons as ic;
use crate::components::modal::LogoModal;
use crate::config::APP_NAME;
use crate::models::{LoadState, ViewMode};
use crate::utils::format::format_logo_count;

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let logo_count = Memo::new(move |_| ctx.gallery.with(|g| g.catalog().len()));

    view! {
        <div class=css::shell>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <Show when=move || ctx.load_state.with(LoadState::is_ready)>
                    <span class=css::count>{move || format_logo_count(logo_count.get())}</span>
                    <nav class=css::viewSwitch aria-label="View">
                        <ViewButton mode=ViewMode::Gallery icon=ic::GRID />
                        <ViewButton mode=ViewMode::Folders icon=ic::EXPLORER />
                    </nav>
                </Show>
            </header>

            <main class=css::content>
                {move || match ctx.load_state.get() {
                    LoadState::Loading => view! {
                        <p class=css::status>"Loading logos..."</p>
                    }.into_any(),
                    LoadState::Failed(message) => view! {
                        <div class=css::failure role="alert">
                            <h2 class=css::failureTitle>"Logo catalog unavailable"</h2>
                            <p class=css::failureDetail>{message}</p>
                        </div>
                    }.into_any(),
                    LoadState::Ready => match ctx.view_mode.get() {
                        ViewMode::Gallery => view! { <GalleryView /> }.into_any(),
                        ViewMode::Folders => view! { <FolderBrowser /> }.into_any(),
                    },
                }}
            </main>

            <LogoModal />
        </div>
    }
}

/// Toggle button for one view mode.
#[component]
fn ViewButton(mode: ViewMode, icon: icondata::Icon) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_active = move || ctx.view_mode.get() == mode;

    view! {
        <button
            class=move || if is_active() {
                format!("{} {}", css::viewButton, css::viewButtonActive)
            } else {
                css::viewButton.to_string()
            }
            aria-pressed=move || is_active().to_string()
            on:click=move |_| ctx.view_mode.set(mode)
        >
            <span class=css::viewIcon><Icon icon=icon /></span>
            <span>{mode.label()}</span>
        </button>
    }
}
