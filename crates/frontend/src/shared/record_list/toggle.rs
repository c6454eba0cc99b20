use crate::shared::icons::icon;
use contracts::shared::record_list::{CodeEnum, ViewMode};
use leptos::prelude::*;
use thaw::*;

fn mode_icon(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "grid",
        ViewMode::Table => "table",
    }
}

/// Grid / table switch. Selecting the active mode again is a no-op.
#[component]
pub fn ViewModeToggle(mode: RwSignal<ViewMode>) -> impl IntoView {
    view! {
        <div class="view-toggle" role="group">
            {ViewMode::all()
                .iter()
                .map(|m| {
                    let m = *m;
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=move || {
                                if mode.get() == m {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            }
                            attr:title=format!("{} view", m.display_name())
                            on_click=move |_| {
                                if mode.get_untracked() != m {
                                    mode.set(m);
                                }
                            }
                        >
                            {icon(mode_icon(m))}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
