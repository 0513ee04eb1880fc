//! Folder browser over the virtual tree rebuilt from record paths.

use leptos::prelude::*;
use leptos_icons::Icon;
use logodeck_core::Command;

use crate::app::AppContext;
use crate::components::browser::PathBar;
use crate::components::gallery::LogoCard;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Lists the folders and files directly under the browse cursor.
///
/// The browser always works on the full catalog; gallery filters don't
/// apply here.
#[component]
pub fn FolderBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let folder = Memo::new(move |_| ctx.gallery.with(|g| g.folder_view()));
    let crumbs = Signal::derive(move || folder.with(|f| f.breadcrumbs.clone()));

    view! {
        <section class=css::browser>
            <PathBar crumbs=crumbs />

            {move || {
                let listing = folder.get();
                if listing.is_empty() {
                    return view! {
                        <div class=css::empty>
                            <span class=css::emptyIcon><Icon icon=ic::FOLDER /></span>
                            <p>"This folder is empty."</p>
                        </div>
                    }.into_any();
                }

                let up = (!listing.is_root()).then(|| view! {
                    <button
                        class=css::folder
                        title="Parent folder"
                        on:click=move |_| {
                            ctx.dispatch(Command::BrowseUp);
                        }
                    >
                        <span class=css::folderIcon><Icon icon=ic::CHEVRON_LEFT /></span>
                        <span class=css::folderName>".."</span>
                    </button>
                });

                let folders = listing
                    .folders
                    .iter()
                    .map(|name| {
                        let target = listing.child_cursor(name);
                        let title = target.clone();
                        view! {
                            <button
                                class=css::folder
                                title=title
                                on:click=move |_| {
                                    ctx.dispatch(Command::Browse(target.clone()));
                                }
                            >
                                <span class=css::folderIcon><Icon icon=ic::FOLDER /></span>
                                <span class=css::folderName>{name.clone()}</span>
                            </button>
                        }
                    })
                    .collect_view();

                let files = listing
                    .files
                    .into_iter()
                    .map(|record| view! { <LogoCard record=record /> })
                    .collect_view();

                view! {
                    <div class=css::grid>
                        {up}
                        {folders}
                        {files}
                    </div>
                }.into_any()
            }}
        </section>
    }
}
