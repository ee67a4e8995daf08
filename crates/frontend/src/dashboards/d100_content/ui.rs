//! Дашборд контента: программа и семестр, вкладки вертикалей/специализаций,
//! список предметов и модули выбранного предмета.
//!
//! Последние выбранные фильтры хранятся в localStorage и восстанавливаются
//! при следующем открытии.

use super::api::{fetch_programs, fetch_subjects};
use crate::shared::collection::{load_collection, retry_collection, use_collection};
use crate::shared::components::{
    FilterPanel, FilterSelect, LoadStatus, PageHeader, PaginationControls, SubTabStrip,
};
use crate::shared::icons::presentable_badge;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::storage::LocalFilterStore;
use contracts::domain::a007_subject::aggregate::{
    tab_filter, ProgramType, Subject, FILTER_SPECIALIZATION, FILTER_UNSPECIALIZED,
    FILTER_VERTICAL, LIST_POLICY,
};
use contracts::shared::list_view::{display_or_placeholder, visible_page, FilterState, DASH};
use contracts::shared::persisted_filters::{
    load_content_filters, save_content_filters, ContentFilters,
};
use contracts::shared::sub_tabs::{derive_category_tabs, SubTab, SubTabCursor, SubTabKind};
use leptos::logging::log;
use leptos::prelude::*;

/// Запомнить выбранную вкладку в сохраняемых фильтрах
fn remember_tab(filters: &mut ContentFilters, tab: &SubTab) {
    match tab.kind {
        SubTabKind::Vertical => {
            filters.vertical_id = tab.id.clone();
            filters.specialization_id.clear();
        }
        SubTabKind::Specialization | SubTabKind::General => {
            filters.specialization_id = tab.id.clone();
            filters.vertical_id.clear();
        }
        _ => {}
    }
}

/// Новые вкладки с восстановлением сохраненного выбора, если он еще существует
fn apply_tabs(cursor: &mut SubTabCursor<String>, tabs: Vec<SubTab>, saved: &ContentFilters) {
    cursor.replace_tabs(tabs);
    for id in [&saved.vertical_id, &saved.specialization_id] {
        if !id.is_empty() && cursor.select(id) {
            break;
        }
    }
}

/// Фильтры списка для активной вкладки
fn tab_filters(cursor: &SubTabCursor<String>) -> FilterState {
    let mut filters = FilterState::with_filters(&[
        FILTER_VERTICAL,
        FILTER_SPECIALIZATION,
        FILTER_UNSPECIALIZED,
    ]);
    if let Some((name, value)) = cursor.active_tab().and_then(tab_filter) {
        filters.set(name, value);
    }
    filters
}

#[component]
pub fn ContentDashboard() -> impl IntoView {
    let store = LocalFilterStore;
    let saved = RwSignal::new(load_content_filters(&store));
    let programs = use_collection::<ProgramType>();
    let subjects = use_collection::<Subject>();
    let cursor = RwSignal::new(SubTabCursor::<String>::default());
    let page = RwSignal::new(LIST_POLICY.first_page());
    let panel_open = RwSignal::new(true);

    // запись при каждом изменении
    Effect::new(move |_| {
        saved.with(|filters| {
            if let Err(e) = save_content_filters(&store, filters) {
                log!("Failed to persist content filters: {}", e);
            }
        });
    });

    load_collection(programs, "programs".to_string(), fetch_programs());

    // без сохраненной программы берется первая
    Effect::new(move |_| {
        let first = programs.with(|p| p.records().first().map(|program| program.id.clone()));
        if let Some(first) = first {
            if saved.with_untracked(|f| f.program_id.is_empty()) {
                saved.update(|f| f.program_id = first);
            }
        }
    });

    let query = Memo::new(move |_| saved.with(|f| (f.program_id.clone(), f.semester.clone())));

    Effect::new(move |_| {
        let (program, semester) = query.get();
        if program.is_empty() {
            return;
        }
        let key = format!("subjects?program={}&semester={}", program, semester);
        load_collection(subjects, key, fetch_subjects(program, semester));
    });

    let retry = Callback::new(move |_| {
        let (program, semester) = query.get_untracked();
        retry_collection(subjects, fetch_subjects(program, semester));
    });

    let selected_program = Memo::new(move |_| {
        let program_id = query.with(|q| q.0.clone());
        programs.with(|p| {
            p.records()
                .iter()
                .find(|program| program.id == program_id)
                .cloned()
        })
    });

    // вкладки пересчитываются при смене программы или данных
    Effect::new(move |_| {
        let tabs = selected_program.with(|program| {
            subjects.with(|s| derive_category_tabs(program.as_ref(), s.records()))
        });
        let remembered = saved.get_untracked();
        cursor.update(|c| apply_tabs(c, tabs, &remembered));
        page.set(LIST_POLICY.first_page());
    });

    let select_tab = Callback::new(move |id: String| {
        let tab = cursor.with_untracked(|c| c.tabs().iter().find(|t| t.id == id).cloned());
        if let Some(tab) = tab {
            cursor.update(|c| {
                c.select(&tab.id);
            });
            saved.update(|f| remember_tab(f, &tab));
            page.set(LIST_POLICY.first_page());
        }
    });

    let set_program = Callback::new(move |value: String| {
        saved.update(|f| {
            f.program_id = value;
            f.semester.clear();
            f.vertical_id.clear();
            f.specialization_id.clear();
        });
    });
    let set_semester = Callback::new(move |value: String| {
        saved.update(|f| f.semester = value);
    });
    let set_search = Callback::new(move |value: String| {
        saved.update(|f| f.search = value);
        page.set(LIST_POLICY.first_page());
    });

    let slice = Signal::derive(move || {
        let filters = cursor.with(tab_filters);
        let search = saved.with(|f| f.search.clone());
        let page = page.get();
        subjects.with(|s| visible_page(s.records(), &filters, &search, page, &LIST_POLICY))
    });
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
        let semesters = selected_program.with(|p| p.as_ref().map(|p| p.semesters).unwrap_or(0));
        (1..=semesters)
            .map(|s| (s.to_string(), format!("Semester {}", s)))
            .collect::<Vec<_>>()
    });
    let active_filters = Signal::derive(move || {
        saved.with(|f| {
            [&f.semester, &f.vertical_id, &f.specialization_id, &f.search]
                .iter()
                .filter(|v| !v.is_empty() && v.as_str() != "all")
                .count()
        })
    });

    let selected_subject = Memo::new(move |_| {
        let child = cursor.with(|c| c.child().cloned());
        child.and_then(|id| subjects.with(|s| s.records().iter().find(|x| x.id == id).cloned()))
    });

    view! {
        <div class="page">
            <PageHeader
                title="Content"
                count=total
                is_loading=Signal::derive(move || subjects.with(|s| s.is_loading()))
                on_refresh=retry
            />

            <div class="page__content">
                <FilterPanel
                    is_expanded=panel_open
                    active_filters_count=active_filters
                    on_closed=Callback::new(|_| {})
                    filter_content=move || view! {
                        <div class="filter-panel__fields">
                            <FilterSelect
                                label="Program"
                                value=Signal::derive(move || saved.with(|f| f.program_id.clone()))
                                options=program_options
                                on_change=set_program
                            />
                            <FilterSelect
                                label="Semester"
                                value=Signal::derive(move || saved.with(|f| f.semester.clone()))
                                options=semester_options
                                on_change=set_semester
                            />
                            <SearchInput
                                value=Signal::derive(move || saved.with(|f| f.search.clone()))
                                on_change=set_search
                                placeholder="Subject, code or faculty"
                            />
                        </div>
                    }
                    pagination_controls=move || view! {
                        <PaginationControls
                            policy=LIST_POLICY
                            current_page=page
                            total_entries=total
                            on_prev=Callback::new(move |_| page.update(|p| *p = LIST_POLICY.prev_page(*p)))
                            on_next=Callback::new(move |_| {
                                let total = total.get_untracked();
                                page.update(|p| *p = LIST_POLICY.next_page(*p, total));
                            })
                        />
                    }
                />

                <SubTabStrip
                    tabs=Signal::derive(move || cursor.with(|c| c.tabs().to_vec()))
                    active=Signal::derive(move || cursor.with(|c| c.active_id().map(str::to_string)))
                    on_select=select_tab
                />

                <LoadStatus
                    is_loading=Signal::derive(move || subjects.with(|s| s.is_loading()))
                    error=Signal::derive(move || subjects.with(|s| s.error().map(str::to_string)))
                    on_retry=retry
                />

                <div class="content-layout">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Code"</th>
                                <th>"Subject"</th>
                                <th>"Semester"</th>
                                <th>"Faculty"</th>
                                <th>"Items"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let search = saved.with(|f| f.search.clone());
                                let selected = cursor.with(|c| c.child().cloned());
                                slice
                                    .get()
                                    .visible
                                    .into_iter()
                                    .map(|subject| {
                                        let id = subject.id.clone();
                                        let is_selected = selected.as_deref() == Some(id.as_str());
                                        view! {
                                            <tr
                                                class:data-table__row--selected=is_selected
                                                on:click=move |_| cursor.update(|c| c.select_child(id.clone()))
                                            >
                                                <td>{highlight_matches(&subject.code, &search)}</td>
                                                <td>{highlight_matches(&subject.name, &search)}</td>
                                                <td>{subject.semester.clone()}</td>
                                                <td>{display_or_placeholder(subject.faculty.as_deref(), DASH)}</td>
                                                <td>{subject.content_count()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>

                    {move || selected_subject.get().map(|subject| view! {
                        <SubjectModules subject=subject on_close=Callback::new(move |_| cursor.update(|c| c.clear_child())) />
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SubjectModules(subject: Subject, on_close: Callback<()>) -> impl IntoView {
    view! {
        <aside class="detail-panel">
            <div class="detail-panel__header">
                <h2>{format!("{} · {}", subject.code, subject.name)}</h2>
                <button class="detail-panel__close" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {if subject.modules.is_empty() {
                view! { <p class="detail-panel__empty">"No modules yet"</p> }.into_any()
            } else {
                subject
                    .modules
                    .into_iter()
                    .map(|module| view! {
                        <section class="module">
                            <h3 class="module__title">{module.title}</h3>
                            <ul class="module__items">
                                {module
                                    .items
                                    .into_iter()
                                    .map(|item| view! {
                                        <li class="module__item">
                                            {presentable_badge(item.kind)}
                                            {match item.url {
                                                Some(url) => view! {
                                                    <a href=url target="_blank" rel="noopener">{item.title}</a>
                                                }.into_any(),
                                                None => view! { <span>{item.title}</span> }.into_any(),
                                            }}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    })
                    .collect_view()
                    .into_any()
            }}
        </aside>
    }
}
