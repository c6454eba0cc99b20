use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// Row of opened tabs above the page area
#[component]
pub fn TabStrip() -> impl IntoView {
    let Some(tabs_store) = use_context::<AppGlobalContext>() else {
        return view! { <></> }.into_any();
    };

    view! {
        <div class="tab-strip">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <Tab tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
    .into_any()
}

#[component]
pub fn Tab(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| key.with_value(|k| tabs_store.active.with(|a| a.as_deref() == Some(k.as_str()))));

    let on_click = move |_| key.with_value(|k| tabs_store.activate_tab(k));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" title="Close" on:click=on_close>"×"</button>
        </div>
    }
}
