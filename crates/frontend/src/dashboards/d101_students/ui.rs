use super::api::fetch_students;
use crate::dashboards::d100_content::api::fetch_programs;
use crate::shared::collection::{load_collection, retry_collection, use_collection};
use crate::shared::components::{
    FilterPanel, FilterSelect, LoadStatus, PageHeader, PaginationControls,
};
use crate::shared::icons::presentable_badge;
use crate::shared::list_controls::{presentable_options, ListControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_student::aggregate::{
    Student, FILTERS, FILTER_PROGRAM, FILTER_SEMESTER, FILTER_STATUS, LIST_POLICY,
};
use contracts::domain::a007_subject::aggregate::ProgramType;
use contracts::shared::list_view::{display_or_placeholder, DASH};
use contracts::shared::presentation::RecordStatus;
use leptos::prelude::*;

const DEFAULT_SEMESTERS: u32 = 8;

#[component]
pub fn StudentsDashboard() -> impl IntoView {
    let controls = ListControls::new(LIST_POLICY, FILTERS);
    let students = use_collection::<Student>();
    let programs = use_collection::<ProgramType>();

    load_collection(programs, "programs".to_string(), fetch_programs());

    // программа и семестр фильтруются на сервере
    let query = Memo::new(move |_| {
        controls.filters.with(|f| {
            (
                f.get(FILTER_PROGRAM).to_string(),
                f.get(FILTER_SEMESTER).to_string(),
            )
        })
    });

    Effect::new(move |_| {
        let (program, semester) = query.get();
        let key = format!("students?program={}&semester={}", program, semester);
        load_collection(students, key, fetch_students(program, semester));
    });

    let retry = Callback::new(move |_| {
        let (program, semester) = query.get_untracked();
        retry_collection(students, fetch_students(program, semester));
    });

    let slice = Signal::derive(move || students.with(|s| controls.slice(s.records())));
    let total = Signal::derive(move || slice.with(|p| p.total_entries));

    let program_options = Signal::derive(move || {
        programs.with(|p| {
            p.records()
                .iter()
                .map(|program| (program.id.clone(), program.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let semester_options = Signal::derive(move || {
        let selected = controls.filters.with(|f| f.get(FILTER_PROGRAM).to_string());
        let semesters = programs.with(|p| {
            p.records()
                .iter()
                .find(|program| program.id == selected)
                .map(|program| program.semesters)
                .unwrap_or(DEFAULT_SEMESTERS)
        });
        (1..=semesters)
            .map(|s| (s.to_string(), format!("Semester {}", s)))
            .collect::<Vec<_>>()
    });

    let set_filter = move |name: &'static str| {
        Callback::new(move |value: String| controls.set_filter(name, value))
    };

    view! {
        <div class="page">
            <PageHeader
                title="Students"
                count=total
                is_loading=Signal::derive(move || students.with(|s| s.is_loading()))
                on_refresh=retry
            />

            <div class="page__content">
                <FilterPanel
                    is_expanded=controls.panel_open
                    active_filters_count=controls.active_count()
                    on_closed=Callback::new(move |_| controls.on_panel_closed())
                    filter_content=move || view! {
                        <div class="filter-panel__fields">
                            <FilterSelect
                                label="Program"
                                value=controls.filter_value(FILTER_PROGRAM)
                                options=program_options
                                on_change=set_filter(FILTER_PROGRAM)
                            />
                            <FilterSelect
                                label="Semester"
                                value=controls.filter_value(FILTER_SEMESTER)
                                options=semester_options
                                on_change=set_filter(FILTER_SEMESTER)
                            />
                            <FilterSelect
                                label="Status"
                                value=controls.filter_value(FILTER_STATUS)
                                options={presentable_options::<RecordStatus>()}
                                on_change=set_filter(FILTER_STATUS)
                            />
                            <SearchInput
                                value=controls.search
                                on_change=Callback::new(move |q| controls.set_search(q))
                                placeholder="Name, roll number or email"
                            />
                        </div>
                    }
                    pagination_controls=move || view! {
                        <PaginationControls
                            policy=LIST_POLICY
                            current_page=controls.page
                            total_entries=total
                            on_prev=Callback::new(move |_| controls.prev())
                            on_next=Callback::new(move |_| controls.next(total.get_untracked()))
                        />
                    }
                />

                <LoadStatus
                    is_loading=Signal::derive(move || students.with(|s| s.is_loading()))
                    error=Signal::derive(move || students.with(|s| s.error().map(str::to_string)))
                    on_retry=retry
                />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Roll No."</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Program"</th>
                            <th>"Semester"</th>
                            <th>"Section"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = controls.search.get();
                            slice
                                .get()
                                .visible
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <tr>
                                            <td>{highlight_matches(&s.roll_number, &query)}</td>
                                            <td>{highlight_matches(&s.name, &query)}</td>
                                            <td>{highlight_matches(&display_or_placeholder(s.email.as_deref(), DASH), &query)}</td>
                                            <td>{s.program.clone()}</td>
                                            <td>{s.semester.clone()}</td>
                                            <td>{display_or_placeholder(s.section.as_deref(), DASH)}</td>
                                            <td>{presentable_badge(s.status)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
