use crate::dashboards;
use crate::layout::global_context::{AppGlobalContext, Dashboard};
use leptos::prelude::*;

/// Область контента: активный дашборд. Смена дашборда размонтирует предыдущий.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content">
            {move || match ctx.active.get() {
                Dashboard::Content => view! { <dashboards::ContentDashboard /> }.into_any(),
                Dashboard::Students => view! { <dashboards::StudentsDashboard /> }.into_any(),
                Dashboard::MyTasks => view! { <dashboards::MyTasksDashboard /> }.into_any(),
                Dashboard::DepartmentTasks => {
                    view! { <dashboards::DepartmentTasksDashboard /> }.into_any()
                }
                Dashboard::Leaves => view! { <dashboards::LeavesDashboard /> }.into_any(),
                Dashboard::Timesheets => view! { <dashboards::TimesheetsDashboard /> }.into_any(),
                Dashboard::Documents => view! { <dashboards::DocumentsDashboard /> }.into_any(),
                Dashboard::Users => view! { <dashboards::UsersDashboard /> }.into_any(),
                Dashboard::ApiEndpoints => {
                    view! { <dashboards::ApiEndpointsDashboard /> }.into_any()
                }
            }}
        </div>
    }
}
