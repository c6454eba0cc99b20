//! Sidebar with collapsible menu groups. Clicking an item opens its tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// (tab key, label, icon)
    pub items: Vec<(&'static str, &'static str, &'static str)>,
}

fn item(key: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon)
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "hr_operations",
            label: "HR Operations",
            icon: "briefcase",
            items: vec![
                item("a001_exit_interview", "user-x"),
                item("a002_final_settlement", "banknote"),
                item("a003_tax_record", "file-text"),
                item("a004_goal", "target"),
            ],
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "bar-chart",
            items: vec![item("a005_attendance_report", "calendar")],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![
                item("a006_branch", "building"),
                item("a007_leave_type", "list"),
                item("a008_user_account", "users"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let Some(ctx) = use_context::<AppGlobalContext>() else {
        log::error!("AppGlobalContext not found");
        return view! { <div class="app-sidebar__content"></div> }.into_any();
    };

    let groups = menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|(id, label, icon_name)| {
                                    let (id, label) = (*id, *label);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(id))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::registry::{is_registered, TAB_KEYS};

    #[test]
    fn test_menu_covers_every_registered_page_once() {
        let keys: Vec<&str> = menu_groups()
            .iter()
            .flat_map(|g| g.items.iter().map(|(key, _, _)| *key))
            .collect();
        assert_eq!(keys, TAB_KEYS);
        assert!(keys.iter().all(|k| is_registered(k)));
    }
}
