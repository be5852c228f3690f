//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the directory list, detail lookup and search session to Dart
//!   via FRB.
//! - Load the place store once per process and hand it to core by reference.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Load and session failures are reported inside response envelopes.
//! - The search session has one writer (`popos_set_query`) at a time.

use log::warn;
use sfpopos_core::{
    core_version as core_version_inner, filter_places, init_logging as init_logging_inner,
    ping as ping_inner, DataSource, ListView, PlaceCard, PlaceId, PlaceStore, RenderPatch,
    TitleBanner,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static PLACE_STORE: OnceLock<Result<PlaceStore, String>> = OnceLock::new();
static LIST_SESSION: OnceLock<Mutex<ListView<'static>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Header text for the page banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoposTitle {
    pub heading: String,
    pub subtitle: String,
}

/// One card as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoposCardItem {
    /// Stable list key; pass to `popos_detail`.
    pub id: u32,
    pub name: String,
    pub address: String,
    pub image: String,
    /// Operating hours flattened to display text.
    pub hours: String,
}

/// List response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoposListResponse {
    /// Whether the store and session were available.
    pub ok: bool,
    /// Current query echoed back.
    pub query: String,
    pub items: Vec<PoposCardItem>,
    /// Keys created by this transition.
    pub mounted: Vec<u32>,
    /// Keys dropped by this transition.
    pub unmounted: Vec<u32>,
    /// Human-readable diagnostics.
    pub message: String,
}

impl PoposListResponse {
    fn failure(query: String, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            query,
            items: Vec::new(),
            mounted: Vec::new(),
            unmounted: Vec::new(),
            message: message.into(),
        }
    }
}

/// Returns the static page banner.
#[flutter_rust_bridge::frb(sync)]
pub fn popos_title() -> PoposTitle {
    let banner = TitleBanner::default();
    PoposTitle {
        heading: banner.heading.to_string(),
        subtitle: banner.subtitle.to_string(),
    }
}

/// Stateless search: filters the store without touching the session.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn popos_search(query: String) -> PoposListResponse {
    let store = match place_store() {
        Ok(store) => store,
        Err(err) => return PoposListResponse::failure(query, format!("popos_search failed: {err}")),
    };

    let items = filter_places(&query, store)
        .into_iter()
        .map(|place| to_card_item(&PlaceCard::from_place(place)))
        .collect::<Vec<_>>();
    let message = result_message(items.len());
    PoposListResponse {
        ok: true,
        query,
        items,
        mounted: Vec::new(),
        unmounted: Vec::new(),
        message,
    }
}

/// Returns one card by id, or `None` when unknown or the store failed to load.
#[flutter_rust_bridge::frb(sync)]
pub fn popos_detail(id: u32) -> Option<PoposCardItem> {
    let store = place_store().ok()?;
    store
        .get(PlaceId(id))
        .map(|place| to_card_item(&PlaceCard::from_place(place)))
}

/// Input-change event for the shared list session.
///
/// # FFI contract
/// - Replaces the session query unconditionally (last write wins).
/// - Returns the full visible list plus the keys mounted/unmounted so the
///   host can keep surviving widgets alive.
#[flutter_rust_bridge::frb(sync)]
pub fn popos_set_query(query: String) -> PoposListResponse {
    with_session(Some(query.clone()), |view| {
        let patch = view.set_query(query);
        session_response(view, &patch)
    })
}

/// Search-form submit. Filtering is already live; the session is unchanged.
///
/// On failure the response echoes the session's last query, which is empty
/// when no session has been created yet.
#[flutter_rust_bridge::frb(sync)]
pub fn popos_submit() -> PoposListResponse {
    with_session(None, |view| {
        let patch = view.submit();
        session_response(view, &patch)
    })
}

fn place_store() -> Result<&'static PlaceStore, String> {
    PLACE_STORE
        .get_or_init(|| {
            DataSource::from_env()
                .load()
                .map_err(|err| err.to_string())
        })
        .as_ref()
        .map_err(Clone::clone)
}

// `query` is the incoming value for input events, `None` for events that
// carry no text; the failure envelope falls back to the session's query.
fn with_session(
    query: Option<String>,
    f: impl FnOnce(&mut ListView<'static>) -> PoposListResponse,
) -> PoposListResponse {
    let store = match place_store() {
        Ok(store) => store,
        Err(err) => {
            let query = query.unwrap_or_else(last_session_query);
            return PoposListResponse::failure(query, format!("session unavailable: {err}"));
        }
    };
    let session = LIST_SESSION.get_or_init(|| Mutex::new(ListView::new(store)));
    let mut view = lock_session(session);
    f(&mut view)
}

fn last_session_query() -> String {
    LIST_SESSION
        .get()
        .map(|session| lock_session(session).query().to_string())
        .unwrap_or_default()
}

fn lock_session<'a>(session: &'a Mutex<ListView<'static>>) -> MutexGuard<'a, ListView<'static>> {
    session.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_recover module=ffi status=poisoned");
        poisoned.into_inner()
    })
}

fn session_response(view: &ListView<'_>, patch: &RenderPatch) -> PoposListResponse {
    let items = view
        .cards()
        .iter()
        .map(|mounted| to_card_item(&mounted.card))
        .collect::<Vec<_>>();
    PoposListResponse {
        ok: true,
        query: view.query().to_string(),
        message: result_message(items.len()),
        items,
        mounted: patch.mounted.iter().map(|id| id.0).collect(),
        unmounted: patch.unmounted.iter().map(|id| id.0).collect(),
    }
}

fn to_card_item(card: &PlaceCard) -> PoposCardItem {
    PoposCardItem {
        id: card.key.0,
        name: card.name.clone(),
        address: card.address.clone(),
        image: card.image.clone(),
        hours: card.hours.to_string(),
    }
}

fn result_message(count: usize) -> String {
    if count == 0 {
        "No places match.".to_string()
    } else {
        format!("Showing {count} place(s).")
    }
}
