use contracts::shared::presentation::{Icon, Presentable};
use leptos::prelude::*;

fn frame(body: AnyView) -> AnyView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {body}
        </svg>
    }
    .into_any()
}

pub fn icon(kind: Icon) -> AnyView {
    let body = match kind {
        Icon::Video => view! {
            <polygon points="23 7 16 12 23 17 23 7"/>
            <rect x="1" y="5" width="15" height="14" rx="2"/>
        }.into_any(),
        Icon::FileText => view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <polyline points="14 2 14 8 20 8"/>
            <line x1="16" y1="13" x2="8" y2="13"/>
            <line x1="16" y1="17" x2="8" y2="17"/>
        }.into_any(),
        Icon::Clipboard => view! {
            <path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"/>
            <rect x="8" y="2" width="8" height="4" rx="1"/>
        }.into_any(),
        Icon::Edit => view! {
            <path d="M12 20h9"/>
            <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4Z"/>
        }.into_any(),
        Icon::Link => view! {
            <path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/>
            <path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/>
        }.into_any(),
        Icon::Table => view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M3 9h18"/>
            <path d="M3 15h18"/>
            <path d="M9 3v18"/>
        }.into_any(),
        Icon::Presentation => view! {
            <path d="M2 3h20"/>
            <path d="M21 3v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V3"/>
            <path d="m7 21 5-5 5 5"/>
        }.into_any(),
        Icon::Image => view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <circle cx="8.5" cy="8.5" r="1.5"/>
            <polyline points="21 15 16 10 5 21"/>
        }.into_any(),
        Icon::Archive => view! {
            <rect x="2" y="3" width="20" height="5" rx="1"/>
            <path d="M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8"/>
            <path d="M10 12h4"/>
        }.into_any(),
        Icon::ArrowDown => view! {
            <line x1="12" y1="5" x2="12" y2="19"/>
            <polyline points="19 12 12 19 5 12"/>
        }.into_any(),
        Icon::ArrowUp => view! {
            <line x1="12" y1="19" x2="12" y2="5"/>
            <polyline points="5 12 12 5 19 12"/>
        }.into_any(),
        Icon::Alert => view! {
            <circle cx="12" cy="12" r="10"/>
            <line x1="12" y1="8" x2="12" y2="12"/>
            <line x1="12" y1="16" x2="12.01" y2="16"/>
        }.into_any(),
        Icon::Clock => view! {
            <circle cx="12" cy="12" r="10"/>
            <polyline points="12 6 12 12 16 14"/>
        }.into_any(),
        Icon::Loader => view! {
            <path d="M21 12a9 9 0 1 1-6.219-8.56"/>
        }.into_any(),
        Icon::Check => view! {
            <polyline points="20 6 9 17 4 12"/>
        }.into_any(),
        Icon::X => view! {
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        }.into_any(),
        Icon::UserCheck => view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <polyline points="16 11 18 13 22 9"/>
        }.into_any(),
        Icon::UserX => view! {
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <line x1="17" y1="8" x2="22" y2="13"/>
            <line x1="22" y1="8" x2="17" y2="13"/>
        }.into_any(),
        Icon::Download => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <polyline points="7 10 12 15 17 10"/>
            <line x1="12" y1="15" x2="12" y2="3"/>
        }.into_any(),
        Icon::Upload => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <polyline points="17 8 12 3 7 8"/>
            <line x1="12" y1="3" x2="12" y2="15"/>
        }.into_any(),
        Icon::Refresh => view! {
            <polyline points="23 4 23 10 17 10"/>
            <path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/>
        }.into_any(),
        Icon::Trash => view! {
            <polyline points="3 6 5 6 21 6"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
            <path d="M10 11v6"/>
            <path d="M14 11v6"/>
        }.into_any(),
        Icon::ChevronLeft => view! {
            <polyline points="15 18 9 12 15 6"/>
        }.into_any(),
        Icon::ChevronRight => view! {
            <polyline points="9 18 15 12 9 6"/>
        }.into_any(),
        Icon::Filter => view! {
            <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>
        }.into_any(),
        Icon::Search => view! {
            <circle cx="11" cy="11" r="8"/>
            <line x1="21" y1="21" x2="16.65" y2="16.65"/>
        }.into_any(),
        Icon::Users => view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }.into_any(),
        Icon::Calendar => view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <line x1="16" y1="2" x2="16" y2="6"/>
            <line x1="8" y1="2" x2="8" y2="6"/>
            <line x1="3" y1="10" x2="21" y2="10"/>
        }.into_any(),
        Icon::Building => view! {
            <rect x="4" y="2" width="16" height="20" rx="2"/>
            <path d="M9 22v-4h6v4"/>
            <path d="M8 6h.01M16 6h.01M12 6h.01M8 10h.01M16 10h.01M12 10h.01M8 14h.01M16 14h.01M12 14h.01"/>
        }.into_any(),
        Icon::Book => view! {
            <path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20"/>
            <path d="M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"/>
        }.into_any(),
        Icon::Code => view! {
            <polyline points="16 18 22 12 16 6"/>
            <polyline points="8 6 2 12 8 18"/>
        }.into_any(),
    };
    frame(body)
}

/// Бейдж значения перечисления: иконка, тон и подпись из `Presentable`
pub fn presentable_badge<P: Presentable>(value: P) -> AnyView {
    let p = value.presentation();
    view! {
        <span class=format!("badge badge--{}", p.tone.css_modifier())>
            {icon(p.icon)}
            <span>{p.label}</span>
        </span>
    }
    .into_any()
}
