use crate::shared::icons::icon;
use contracts::shared::record_list::{CodeEnum, Presentable, RecordAction};
use leptos::prelude::*;
use thaw::*;

/// Log line for a requested action. `record_id` is `None` for page-level actions.
pub fn action_message(page_key: &str, action: RecordAction, record_id: Option<&str>) -> String {
    match record_id {
        Some(id) => format!(
            "[{}] '{}' requested for {}: no command is wired up, records are read-only",
            page_key,
            action.code(),
            id
        ),
        None => format!(
            "[{}] '{}' requested: no command is wired up, records are read-only",
            page_key,
            action.code()
        ),
    }
}

/// Every action ends here; the store is never touched.
pub fn report_action(page_key: &str, action: RecordAction, record_id: Option<&str>) {
    log::info!("{}", action_message(page_key, action, record_id));
}

/// Icon-only buttons of one card or table row
#[component]
pub fn RowActions(
    page_key: &'static str,
    #[prop(into)] record_id: String,
    actions: &'static [RecordAction],
) -> impl IntoView {
    let record_id = StoredValue::new(record_id);
    view! {
        <div class="row-actions">
            {actions
                .iter()
                .map(|action| {
                    let action = *action;
                    view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            attr:title=action.display_name()
                            attr:class=format!("row-actions__{}", action.code())
                            on_click=move |_| {
                                record_id.with_value(|id| report_action(page_key, action, Some(id)))
                            }
                        >
                            {icon(action.presentation().icon)}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Labelled buttons in the page header
#[component]
pub fn PageActions(page_key: &'static str, actions: Vec<RecordAction>) -> impl IntoView {
    actions
        .into_iter()
        .map(|action| {
            let appearance = if action == RecordAction::Create {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            };
            view! {
                <Button appearance=appearance on_click=move |_| report_action(page_key, action, None)>
                    {icon(action.presentation().icon)}
                    {action.display_name()}
                </Button>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_message() {
        let msg = action_message("a006_branch", RecordAction::Delete, Some("B004"));
        assert!(msg.starts_with("[a006_branch] 'delete' requested for B004"));

        let msg = action_message("a004_goal", RecordAction::Create, None);
        assert!(msg.starts_with("[a004_goal] 'create' requested:"));
    }
}
