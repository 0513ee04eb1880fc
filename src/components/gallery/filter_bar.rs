//! Search box, dropdown filters, sort menu and reset button.

use leptos::prelude::*;
use leptos_icons::Icon;
use logodeck_core::{Command, FilterField, SortSpec, style_label, year_label};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SEARCH_DEBOUNCE_MS;
use crate::utils::{debouncer, dom};

stylance::import_crate_style!(css, "src/components/gallery/filter_bar.module.css");

const SEARCH_INPUT_ID: &str = "logo-search";

/// `(value, label)` pairs for a select menu.
type Options = Vec<(String, String)>;

fn plain_options(values: Vec<String>) -> Options {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

fn labeled_options(values: Vec<String>, label: fn(&str) -> &str) -> Options {
    values
        .into_iter()
        .map(|v| {
            let text = label(&v).to_string();
            (v, text)
        })
        .collect()
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // The catalog never changes once loaded, so the menus are built once.
    let (families, styles, years, formats) = ctx.gallery.with_untracked(|g| {
        let catalog = g.catalog();
        (
            plain_options(catalog.families()),
            labeled_options(catalog.styles(), style_label),
            labeled_options(catalog.years(), year_label),
            plain_options(catalog.formats()),
        )
    });

    let search_text = RwSignal::new(ctx.gallery.with_untracked(|g| g.criteria().search.clone()));
    // Dropping the pending timeout on unmount cancels it.
    let search_debouncer = StoredValue::new_local(debouncer(SEARCH_DEBOUNCE_MS));

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search_text.set(value.clone());
        search_debouncer.update_value(|d| d.call(move || { ctx.dispatch(Command::Search(value)); }));
    };

    let on_search_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            search_debouncer.update_value(|d| d.cancel());
            ctx.dispatch(Command::Search(search_text.get_untracked()));
        }
    };

    let nothing_to_clear = move || {
        search_text.with(|s| s.trim().is_empty()) && ctx.gallery.with(|g| g.criteria().is_empty())
    };

    let on_clear = move |_: leptos::ev::MouseEvent| {
        search_debouncer.update_value(|d| d.cancel());
        search_text.set(String::new());
        ctx.dispatch(Command::ClearFilters);
        dom::focus_element(&format!("#{}", SEARCH_INPUT_ID));
    };

    view! {
        <div class=css::bar>
            <label class=css::search>
                <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                <input
                    id=SEARCH_INPUT_ID
                    class=css::searchInput
                    type="search"
                    placeholder="Search logos by name, family or file..."
                    aria-label="Search logos"
                    autocomplete="off"
                    prop:value=move || search_text.get()
                    on:input=on_search_input
                    on:keydown=on_search_keydown
                />
            </label>

            <div class=css::selects>
                <FilterSelect field=FilterField::Family label="Family" all_label="All families" options=families />
                <FilterSelect field=FilterField::Style label="Style" all_label="All styles" options=styles />
                <FilterSelect field=FilterField::Year label="Year" all_label="All years" options=years />
                <FilterSelect field=FilterField::Format label="Format" all_label="All formats" options=formats />
                <SortSelect />

                <button
                    class=css::clear
                    disabled=nothing_to_clear
                    on:click=on_clear
                >
                    <span class=css::clearIcon><Icon icon=ic::CLOSE /></span>
                    <span>"Clear filters"</span>
                </button>
            </div>
        </div>
    }
}

/// Dropdown for one filter dimension. The empty value means "any".
#[component]
fn FilterSelect(
    field: FilterField,
    label: &'static str,
    all_label: &'static str,
    options: Options,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let current = move || ctx.gallery.with(|g| g.criteria().get(field).to_string());

    view! {
        <label class=css::field>
            <span class=css::fieldLabel>{label}</span>
            <select
                class=css::select
                name=field.as_str()
                prop:value=current
                on:change=move |ev| { ctx.dispatch(Command::Filter(field, event_target_value(&ev))); }
            >
                <option value="">{all_label}</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
fn SortSelect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let current = move || ctx.gallery.with(|g| g.sort().to_string());

    view! {
        <label class=css::field>
            <span class=css::fieldLabel>"Sort"</span>
            <select
                class=css::select
                name="sort"
                prop:value=current
                on:change=move |ev| {
                    let spec = event_target_value(&ev).parse().unwrap_or_default();
                    ctx.dispatch(Command::Sort(spec));
                }
            >
                {SortSpec::choices()
                    .into_iter()
                    .map(|spec| view! { <option value=spec.to_string()>{spec.label()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
