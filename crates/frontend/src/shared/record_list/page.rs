//! Generic list page shared by every HR record type.
//!
//! ```text
//! store ──summary()──────────────────────────────▶ SummaryCards
//!   └──filter(filter signal)──▶ ListView (Memo) ──layout(view_mode)──▶ grid | table
//! ```
//!
//! The memo depends on the filter signal only, so switching the layout reuses
//! the already filtered list.

use super::actions::PageActions;
use super::grid::RecordGrid;
use super::state::create_state;
use super::table::RecordTable;
use super::toggle::ViewModeToggle;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::ui::Badge;
use crate::shared::config::AppConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::record_list::{
    Displayable, FilterDimension, FilterState, Layout, ListView, RecordAction, RecordStore,
    Summarize, FILTER_ALL,
};
use leptos::prelude::*;
use thaw::*;

/// Labels of the active filters, in dimension order, search first.
pub fn active_filter_tags(
    filter: &FilterState,
    dimensions: &[FilterDimension],
) -> Vec<(Option<String>, String)> {
    let mut tags = Vec::new();
    let query = filter.search_query.trim();
    if !query.is_empty() {
        tags.push((None, format!("Search: {}", query)));
    }
    for dim in dimensions {
        let value = filter.category(&dim.key);
        if value == FILTER_ALL {
            continue;
        }
        let label = dim.option_label(value).unwrap_or(value);
        tags.push((Some(dim.key.clone()), format!("{}: {}", dim.label, label)));
    }
    tags
}

/// "Showing 3 of 7"
pub fn result_count_label(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{} records", total)
    } else {
        format!("Showing {} of {}", shown, total)
    }
}

#[component]
pub fn RecordListPage<R>(
    /// Entity key, e.g. `"a006_branch"`; also the prefix of the stored list state
    page_key: &'static str,
    title: &'static str,
    store: RecordStore<R>,
    dimensions: Vec<FilterDimension>,
    #[prop(optional)] search_placeholder: Option<&'static str>,
    /// Header buttons, e.g. export and create
    #[prop(optional)]
    page_actions: Vec<RecordAction>,
    #[prop(optional)] row_actions: Option<&'static [RecordAction]>,
) -> impl IntoView
where
    R: Displayable + Summarize + Send + Sync + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let row_actions = row_actions.unwrap_or(RecordAction::ROW);

    let total = store.len();
    let summary = store.summary();
    let store = StoredValue::new(store);

    let signals = create_state(
        page_key,
        &dimensions,
        config.default_view_mode,
        config.persist_list_state,
    );
    let filter = signals.filter;
    let view_mode = signals.view_mode;

    let list_view = Memo::new(move |_| {
        filter.with(|f| store.with_value(|s| ListView::build(&s.filter(f))))
    });

    // Form controls mirror the filter state; the filter signal is the source of truth.
    let search = RwSignal::new(filter.with_untracked(|f| f.search_query.clone()));
    Effect::new(move |_| {
        let query = search.get();
        if filter.with_untracked(|f| f.search_query != query) {
            filter.update(|f| f.set_search(&query));
        }
    });

    let selects: Vec<(FilterDimension, RwSignal<String>)> = dimensions
        .iter()
        .map(|d| {
            let current = filter.with_untracked(|f| f.category(&d.key).to_string());
            let selected = RwSignal::new(current);
            let key = d.key.clone();
            Effect::new(move |_| {
                let value = selected.get();
                if filter.with_untracked(|f| f.category(&key) != value) {
                    filter.update(|f| f.set_category(&key, &value));
                }
            });
            (d.clone(), selected)
        })
        .collect();
    let selects = StoredValue::new(selects);
    let dimensions = StoredValue::new(dimensions);

    let clear_tag = move |key: Option<String>| match key {
        None => search.set(String::new()),
        Some(key) => selects.with_value(|all| {
            if let Some((_, selected)) = all.iter().find(|(d, _)| d.key == key) {
                selected.set(FILTER_ALL.to_string());
            }
        }),
    };

    let reset_filters = move || {
        search.set(String::new());
        selects.with_value(|all| {
            for (_, selected) in all {
                selected.set(FILTER_ALL.to_string());
            }
        });
        filter.update(|f| f.reset());
    };

    let active_filters_count = Signal::derive(move || filter.with(|f| f.active_filters_count()));
    let shown = Signal::derive(move || list_view.with(|lv| lv.len()));

    view! {
        <PageFrame page_id=format!("{}--list", page_key) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge variant="primary".to_string()>{total.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <PageActions page_key=page_key actions=page_actions />
                </div>
            </div>

            <div class="page__content">
                <SummaryCards stats=summary />

                <FilterPanel
                    is_expanded=signals.filters_expanded
                    active_filters_count=active_filters_count
                    toolbar=move || view! {
                        <span class="filter-panel__count">
                            {move || result_count_label(shown.get(), total)}
                        </span>
                        <ViewModeToggle mode=view_mode />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="width: 260px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Search"</Label>
                                    <Input
                                        value=search
                                        placeholder=search_placeholder.unwrap_or("Search...")
                                    />
                                </Flex>
                            </div>
                            {selects.with_value(|all| {
                                all.iter()
                                    .map(|(dim, selected)| {
                                        let selected = *selected;
                                        let label = dim.label.clone();
                                        let options = dim.options
                                            .iter()
                                            .map(|o| {
                                                let value = o.value.clone();
                                                let text = o.label.clone();
                                                view! {
                                                    <option value=value>{text}</option>
                                                }
                                            })
                                            .collect_view();
                                        view! {
                                            <div style="width: 200px;">
                                                <Flex vertical=true gap=FlexGap::Small>
                                                    <Label>{label}</Label>
                                                    <Select value=selected>
                                                        {options}
                                                    </Select>
                                                </Flex>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })}
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || active_filters_count.get() == 0)
                                on_click=move |_| reset_filters()
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    }
                    filter_tags=move || view! {
                        <div class="filter-tags">
                            {move || {
                                let tags = filter.with(|f| {
                                    dimensions.with_value(|dims| active_filter_tags(f, dims))
                                });
                                tags.into_iter()
                                    .map(|(key, label)| view! {
                                        <FilterTag
                                            label=label
                                            on_remove=Callback::new(move |_| clear_tag(key.clone()))
                                        />
                                    })
                                    .collect_view()
                            }}
                        </div>
                    }
                />

                {move || {
                    let mode = view_mode.get();
                    list_view.with(|lv| {
                        if lv.is_empty() {
                            return view! {
                                <div class="empty-state">
                                    <p>{format!("No {} match the current filters.", title.to_lowercase())}</p>
                                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_filters()>
                                        "Clear filters"
                                    </Button>
                                </div>
                            }
                            .into_any();
                        }
                        match lv.layout(mode) {
                            Layout::Grid(cards) => view! {
                                <RecordGrid
                                    page_key=page_key
                                    columns=lv.columns.clone()
                                    cards=cards.into_iter().cloned().collect()
                                    row_actions=row_actions
                                />
                            }
                            .into_any(),
                            Layout::Table { headline_title, columns, rows } => view! {
                                <RecordTable
                                    page_key=page_key
                                    headline_title=headline_title
                                    columns=columns.to_vec()
                                    rows=rows.into_iter().cloned().collect()
                                    row_actions=row_actions
                                />
                            }
                            .into_any(),
                        }
                    })
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_goal::{seed, GoalCategory, GoalPriority, GoalStatus, KEY_PRIORITY};
    use contracts::domain::{KEY_CATEGORY, KEY_STATUS};
    use contracts::shared::record_list::ViewMode;

    fn dimensions() -> Vec<FilterDimension> {
        vec![
            FilterDimension::from_enum::<GoalStatus>(KEY_STATUS, "Status"),
            FilterDimension::from_enum::<GoalCategory>(KEY_CATEGORY, "Category"),
            FilterDimension::from_enum::<GoalPriority>(KEY_PRIORITY, "Priority"),
        ]
    }

    #[test]
    fn test_active_filter_tags_use_option_labels() {
        let filter = FilterState::new()
            .with_search("  finance ")
            .with_category(KEY_PRIORITY, "high")
            .with_category(KEY_STATUS, "in_progress");
        let tags = active_filter_tags(&filter, &dimensions());
        assert_eq!(
            tags,
            vec![
                (None, "Search: finance".to_string()),
                (Some("status".to_string()), "Status: In Progress".to_string()),
                (Some("priority".to_string()), "Priority: High".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_tags_without_filters() {
        assert!(active_filter_tags(&FilterState::new(), &dimensions()).is_empty());
    }

    #[test]
    fn test_result_count_label() {
        assert_eq!(result_count_label(7, 7), "7 records");
        assert_eq!(result_count_label(2, 7), "Showing 2 of 7");
    }

    #[test]
    fn test_toggle_keeps_filtered_ids() {
        let store = seed::store().unwrap();
        let filter = FilterState::new().with_category(KEY_PRIORITY, "high");
        let lv = ListView::build(&store.filter(&filter));
        let grid = lv.layout(ViewMode::Grid).ids();
        let table = lv.layout(ViewMode::Table).ids();
        assert!(!grid.is_empty());
        assert_eq!(grid, table);
    }
}
