//! Collapsible block above a list holding the search box, one dropdown per
//! filter dimension and the chips of the filters currently applied.

use crate::shared::icons::icon;
use leptos::prelude::*;

fn collapsible_class(expanded: bool) -> &'static str {
    if expanded {
        "filter-panel__body filter-panel__body--open"
    } else {
        "filter-panel__body filter-panel__body--closed"
    }
}

#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    /// Shown as a badge next to the title when non-zero
    #[prop(into)]
    active_filters_count: Signal<usize>,
    /// Right side of the header, always visible
    #[prop(into)]
    toolbar: ViewFn,
    #[prop(into)] filter_content: ViewFn,
    #[prop(optional, into)] filter_tags: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <section class="filter-panel">
            <header class="filter-panel__header">
                <button
                    class="filter-panel__toggle"
                    aria-expanded=move || is_expanded.get().to_string()
                    on:click=move |_| is_expanded.update(|open| *open = !*open)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--open"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || active_filters_count.get() != 0>
                        <span class="badge badge--primary">
                            {move || active_filters_count.get()}
                        </span>
                    </Show>
                </button>
                <div class="filter-panel__toolbar">{toolbar.run()}</div>
            </header>

            <div class=move || collapsible_class(is_expanded.get())>
                {filter_content.run()}
                {filter_tags.map(|tags| view! { <div class="filter-panel__tags">{tags.run()}</div> })}
            </div>
        </section>
    }
}

/// Removable chip for one applied filter
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <span class="filter-tag">
            {label}
            <button
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsible_class() {
        assert!(collapsible_class(true).ends_with("--open"));
        assert!(collapsible_class(false).ends_with("--closed"));
    }
}
