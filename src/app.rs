//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! catalog load that gates everything else.

use leptos::prelude::*;
use logodeck_core::{Catalog, Command, Gallery, LogoRecord, Outcome};
use wasm_bindgen_futures::spawn_local;

use crate::components::Shell;
use crate::config::{CATALOG_URL, DEFAULT_PAGE_SIZE, cache::CATALOG_KEY};
use crate::error::LoadError;
use crate::models::{LoadState, ViewMode};
use crate::utils::{cache, dom, fetch_json_cached};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. All fields are signals, so the struct is
/// `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog availability; gates every gallery view.
    pub load_state: RwSignal<LoadState>,

    /// Session state: filters, ordering, revealed page and browse cursor.
    pub gallery: RwSignal<Gallery>,

    /// Grid or folder browser.
    pub view_mode: RwSignal<ViewMode>,

    /// Record shown in the detail modal.
    pub selected: RwSignal<Option<LogoRecord>>,
}

impl AppContext {
    /// Creates a context with an empty gallery, waiting for the catalog.
    pub fn new() -> Self {
        Self {
            load_state: RwSignal::new(LoadState::Loading),
            gallery: RwSignal::new(Gallery::new(Catalog::empty(), DEFAULT_PAGE_SIZE)),
            view_mode: RwSignal::new(ViewMode::default()),
            selected: RwSignal::new(None),
        }
    }

    /// Run a command against the session state.
    ///
    /// Views read their records back from `gallery`; the outcome only carries
    /// counts and the new browse cursor. `None` once the signal is disposed.
    pub fn dispatch(&self, command: Command) -> Option<Outcome> {
        self.gallery.try_update(|gallery| gallery.apply(command))
    }

    /// Install a freshly loaded catalog and open the gallery.
    pub fn install(&self, catalog: Catalog) {
        self.gallery.set(Gallery::new(catalog, DEFAULT_PAGE_SIZE));
        self.load_state.set(LoadState::Ready);
    }

    /// Record a load failure. Only the diagnostic is rendered afterwards.
    pub fn fail(&self, error: LoadError) {
        let message = error.to_string();
        dom::log_error(&message);
        self.load_state.set(LoadState::Failed(message));
    }

    pub fn open(&self, record: LogoRecord) {
        self.selected.set(Some(record));
    }

    pub fn close(&self) {
        self.selected.set(None);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the data file and validate it into a catalog.
async fn load_catalog() -> Result<Catalog, LoadError> {
    let records: Vec<LogoRecord> = fetch_json_cached(CATALOG_URL, CATALOG_KEY).await?;
    Catalog::new(records).map_err(|e| {
        // A cached copy that fails validation would otherwise stick for the session.
        cache::remove(CATALOG_KEY);
        LoadError::from(e)
    })
}

/// Root application component with error boundary.
///
/// Creates and provides the AppContext, starts the catalog load and renders
/// the Shell.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    spawn_local(async move {
        match load_catalog().await {
            Ok(catalog) => ctx.install(catalog),
            Err(error) => ctx.fail(error),
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #555; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            margin-top: 1.5rem;
                            padding: 0.6rem 1.5rem;
                            border: none;
                            border-radius: 6px;
                            background: #0078d4;
                            color: white;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
