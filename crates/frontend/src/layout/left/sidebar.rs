//! Sidebar with dashboard groups

use crate::layout::global_context::{AppGlobalContext, Dashboard};
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    items: &'static [Dashboard],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        label: "Academics",
        items: &[Dashboard::Content, Dashboard::Students],
    },
    MenuGroup {
        label: "Performance",
        items: &[
            Dashboard::MyTasks,
            Dashboard::DepartmentTasks,
            Dashboard::Leaves,
            Dashboard::Timesheets,
        ],
    },
    MenuGroup {
        label: "Administration",
        items: &[Dashboard::Documents, Dashboard::Users, Dashboard::ApiEndpoints],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav data-zone="left" class="sidebar" class:hidden=move || !ctx.left_open.get()>
            {MENU_GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            <ul>
                                {group
                                    .items
                                    .iter()
                                    .copied()
                                    .map(|dashboard| {
                                        view! {
                                            <li
                                                class="sidebar__item"
                                                class:sidebar__item--active=move || ctx.active.get() == dashboard
                                                on:click=move |_| ctx.activate(dashboard)
                                            >
                                                {icon(dashboard.icon())}
                                                <span>{dashboard.title()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dashboard_in_menu_once() {
        let listed: Vec<Dashboard> = MENU_GROUPS.iter().flat_map(|g| g.items.iter().copied()).collect();
        assert_eq!(listed.len(), Dashboard::ALL.len());
        for dashboard in Dashboard::ALL {
            assert!(listed.contains(dashboard));
        }
    }
}
