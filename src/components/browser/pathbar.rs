//! Path bar component (Finder style breadcrumbs).
//!
//! Shows every ancestor of the browse cursor as a clickable segment; the
//! last segment is the current folder and is disabled.

use leptos::prelude::*;
use leptos_icons::Icon;
use logodeck_core::{Breadcrumb, Command};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/pathbar.module.css");

#[component]
pub fn PathBar(#[prop(into)] crumbs: Signal<Vec<Breadcrumb>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::pathbar aria-label="Folder path">
            {move || {
                crumbs
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let icon = if idx == 0 { ic::HOME } else { ic::FOLDER };

                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {if crumb.current {
                                    view! {
                                        <SegmentCurrent icon=icon label=crumb.label.clone() />
                                    }.into_any()
                                } else {
                                    let command = if idx == 0 {
                                        Command::BrowseRoot
                                    } else {
                                        Command::Browse(crumb.target.clone())
                                    };
                                    view! {
                                        <SegmentLink
                                            icon=icon
                                            label=crumb.label.clone()
                                            on_click=move || {
                                                ctx.dispatch(command.clone());
                                            }
                                        />
                                    }.into_any()
                                }}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            class=css::segment
            on:click=move |_| on_click()
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button
            class=format!("{} {}", css::segment, css::segmentCurrent)
            aria-current="page"
            disabled=true
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
