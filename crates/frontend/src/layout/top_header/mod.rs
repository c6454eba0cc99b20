//! TopHeader component: application top bar with the sidebar toggle,
//! the application title and the live clock.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::live_clock::LiveClock;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let left_open = use_context::<AppGlobalContext>()
        .map(|ctx| ctx.left_open)
        .unwrap_or_else(|| RwSignal::new(true));

    let toggle_sidebar = move |_| left_open.update(|open| *open = !*open);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{config.app_title.clone()}</span>
            </div>

            <div class="top-header__actions">
                <LiveClock tick_ms=config.clock_tick_ms />
            </div>
        </div>
    }
}
