use contracts::shared::record_list::{
    CodeEnum, FilterDimension, FilterState, ViewMode, FILTER_ALL,
};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Bump when [`PersistedState`] changes shape; old entries are then ignored.
const STATE_VERSION: &str = "v1";

pub fn storage_key(page_key: &str) -> String {
    format!("{}_list_state_{}", page_key, STATE_VERSION)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    filter: FilterState,
    /// Kept as a raw code so an unknown mode does not discard the filter
    #[serde(default)]
    view_mode: Option<String>,
}

/// Reactive UI state of one list page.
///
/// Filter and view mode live in separate signals so toggling the layout never
/// re-runs the filter.
#[derive(Clone, Copy)]
pub struct ListSignals {
    pub filter: RwSignal<FilterState>,
    pub view_mode: RwSignal<ViewMode>,
    pub filters_expanded: RwSignal<bool>,
}

pub fn encode(filter: &FilterState, view_mode: ViewMode) -> Option<String> {
    let state = PersistedState {
        filter: filter.clone(),
        view_mode: Some(view_mode.code().to_string()),
    };
    serde_json::to_string(&state).ok()
}

/// Decode a stored entry, dropping selections the page no longer offers.
/// A missing or unknown view mode resolves to `default_mode`.
pub fn decode(
    raw: &str,
    dimensions: &[FilterDimension],
    default_mode: ViewMode,
) -> Option<(FilterState, ViewMode)> {
    let state: PersistedState = serde_json::from_str(raw).ok()?;
    let mut filter = FilterState::new();
    filter.set_search(&state.filter.search_query);
    for (key, value) in &state.filter.categories {
        let known = dimensions
            .iter()
            .find(|d| &d.key == key)
            .is_some_and(|d| d.option_label(value).is_some());
        if known && value != FILTER_ALL {
            filter.set_category(key, value);
        }
    }
    let view_mode = state
        .view_mode
        .as_deref()
        .and_then(ViewMode::from_code)
        .unwrap_or(default_mode);
    Some((filter, view_mode))
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted(
    key: &str,
    dimensions: &[FilterDimension],
    default_mode: ViewMode,
) -> Option<(FilterState, ViewMode)> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    decode(&raw, dimensions, default_mode)
}

fn save_persisted(key: &str, filter: &FilterState, view_mode: ViewMode) {
    let Some(storage) = storage() else { return };
    let Some(raw) = encode(filter, view_mode) else {
        return;
    };
    if storage.set_item(key, &raw).is_err() {
        log::warn!("Failed to save list state '{}'", key);
    }
}

/// Create the signals of a list page, restoring the stored state when
/// `persist` is on and saving every later change.
pub fn create_state(
    page_key: &str,
    dimensions: &[FilterDimension],
    default_mode: ViewMode,
    persist: bool,
) -> ListSignals {
    let key = storage_key(page_key);
    let (filter, view_mode) = if persist {
        load_persisted(&key, dimensions, default_mode).unwrap_or((FilterState::new(), default_mode))
    } else {
        (FilterState::new(), default_mode)
    };

    let signals = ListSignals {
        filter: RwSignal::new(filter),
        view_mode: RwSignal::new(view_mode),
        filters_expanded: RwSignal::new(true),
    };

    if persist {
        Effect::new(move |_| {
            let mode = signals.view_mode.get();
            signals
                .filter
                .with(|filter| save_persisted(&key, filter, mode));
        });
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_branch::{BranchStatus, BranchType, KEY_BRANCH_TYPE};
    use contracts::domain::KEY_STATUS;

    fn dimensions() -> Vec<FilterDimension> {
        vec![
            FilterDimension::from_enum::<BranchStatus>(KEY_STATUS, "Status"),
            FilterDimension::from_enum::<BranchType>(KEY_BRANCH_TYPE, "Type"),
        ]
    }

    #[test]
    fn test_storage_key_is_versioned() {
        assert_eq!(storage_key("a006_branch"), "a006_branch_list_state_v1");
    }

    #[test]
    fn test_encode_then_restore() {
        let filter = FilterState::new()
            .with_search("pune")
            .with_category(KEY_STATUS, "inactive");
        let raw = encode(&filter, ViewMode::Table).unwrap();
        let (restored, mode) = decode(&raw, &dimensions(), ViewMode::Grid).unwrap();
        assert_eq!(restored, filter);
        assert_eq!(mode, ViewMode::Table);
    }

    #[test]
    fn test_decode_drops_unknown_selections() {
        let raw = r#"{"filter":{"search_query":"x","categories":{"status":"closed","branch_type":"sales","region":"north"}},"view_mode":"grid"}"#;
        let (filter, mode) = decode(raw, &dimensions(), ViewMode::Table).unwrap();
        assert_eq!(filter.search_query, "x");
        assert_eq!(filter.category(KEY_STATUS), FILTER_ALL);
        assert_eq!(filter.category(KEY_BRANCH_TYPE), "sales");
        assert_eq!(filter.active_filters_count(), 2);
        assert_eq!(mode, ViewMode::Grid);
    }

    #[test]
    fn test_decode_tolerates_missing_fields_and_garbage() {
        let (filter, mode) = decode("{}", &dimensions(), ViewMode::Table).unwrap();
        assert!(!filter.is_active());
        assert_eq!(mode, ViewMode::Table);
        assert!(decode("not json", &dimensions(), ViewMode::Grid).is_none());
    }

    #[test]
    fn test_unknown_view_mode_keeps_filter() {
        let raw = r#"{"filter":{"search_query":"pune","categories":{"status":"inactive"}},"view_mode":"list"}"#;
        let (filter, mode) = decode(raw, &dimensions(), ViewMode::Table).unwrap();
        assert_eq!(filter.search_query, "pune");
        assert_eq!(filter.category(KEY_STATUS), "inactive");
        assert_eq!(mode, ViewMode::Table);
    }
}
