use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let left_open = use_context::<AppGlobalContext>()
        .map(|ctx| ctx.left_open)
        .unwrap_or_else(|| RwSignal::new(true));

    view! {
        <div data-zone="left" class="left" class:hidden=move || !left_open.get()>
            {children()}
        </div>
    }
}
