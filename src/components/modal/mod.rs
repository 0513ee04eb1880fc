//! Logo detail dialog.

use leptos::prelude::*;
use leptos_icons::Icon;
use logodeck_core::LogoRecord;

use crate::app::AppContext;
use crate::components::LogoImage;
use crate::components::icons as ic;
use crate::config::repo_links;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/modal/modal.module.css");

const CLOSE_BUTTON_ID: &str = "logo-modal-close";

/// Modal for `AppContext::selected`. Closed by the close button, a click on
/// the backdrop or Escape.
#[component]
pub fn LogoModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    Effect::new(move |_| {
        let open = ctx.selected.with(Option::is_some);
        dom::set_body_scroll_locked(open);
        if open {
            dom::focus_element(&format!("#{}", CLOSE_BUTTON_ID));
        }
    });

    move || {
        ctx.selected
            .get()
            .map(|record| view! { <ModalDialog record=record /> })
    }
}

#[component]
fn ModalDialog(record: LogoRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let links = repo_links();
    let raw_url = links.raw_url(&record.path);
    let blob_url = links.blob_url(&record.path);
    let preview_url = raw_url.clone();

    let on_close = move |_: leptos::ev::MouseEvent| ctx.close();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close();
        }
    };

    let details = [
        ("Family", record.family.clone()),
        ("Style", record.style_label().to_string()),
        ("Year", record.year_label().to_string()),
        ("Format", record.format.clone()),
        ("Size", record.size.clone().unwrap_or_else(|| "-".to_string())),
        ("File", record.filename.clone()),
        ("Path", record.path.clone()),
    ];

    view! {
        <div class=css::backdrop on:click=on_close on:keydown=on_keydown>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                aria-label=record.name.clone()
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <header class=css::header>
                    <h2 class=css::title>{record.name.clone()}</h2>
                    <button
                        id=CLOSE_BUTTON_ID
                        class=css::close
                        aria-label="Close"
                        on:click=on_close
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::preview>
                    <LogoImage src=preview_url alt=record.name.clone() class=css::image />
                </div>

                <dl class=css::details>
                    {details
                        .into_iter()
                        .map(|(term, value)| view! {
                            <div class=css::detail>
                                <dt class=css::term>{term}</dt>
                                <dd class=css::value>{value}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>

                <footer class=css::actions>
                    <a
                        class=format!("{} {}", css::action, css::actionPrimary)
                        href=raw_url
                        download=record.filename.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <Icon icon=ic::DOWNLOAD />
                        <span>"Download"</span>
                    </a>
                    <a
                        class=css::action
                        href=blob_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <Icon icon=ic::EXTERNAL_LINK />
                        <span>"View in repository"</span>
                    </a>
                </footer>
            </div>
        </div>
    }
}
