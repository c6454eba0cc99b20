//! Application shell: the root layout with the sidebar and the tab area.
//!
//! Tab pages are created once per opened tab and kept alive while hidden,
//! so list state survives switching between tabs.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let Some(tabs_store) = use_context::<AppGlobalContext>() else {
        log::error!("AppGlobalContext context not found");
        return view! { <div class="placeholder">"Application context is missing"</div> }
            .into_any();
    };

    // Restores the tab from `?active=` and keeps the URL in sync from now on.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("<For> children called for: '{}'", tab.key);
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
    .into_any()
}
