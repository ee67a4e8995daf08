/// Утилиты для списков: подсветка совпадений и поле поиска
use contracts::shared::presentation::Icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Части текста: `(фрагмент, совпадает)`; регистр не учитывается
pub fn split_matches<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let query = query.trim();
    if query.is_empty() {
        return vec![(text, false)];
    }

    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();
    // смена регистра может изменить длину в байтах
    if text_lower.len() != text.len() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&query_lower) {
        let start = last_pos + pos;
        let end = start + query_lower.len();
        if start > last_pos {
            parts.push((&text[last_pos..start], false));
        }
        parts.push((&text[start..end], true));
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push((&text[last_pos..], false));
    }
    parts
}

/// Подсветка совпадений в тексте
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts = split_matches(text, query)
        .into_iter()
        .map(|(part, matched)| {
            let part = part.to_string();
            if matched {
                view! { <mark class="search-match">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let clear_filter = move |_| {
        if let (Some(window), Some(timeout_id)) = (web_sys::window(), debounce_timeout.get_value()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            {crate::shared::icons::icon(Icon::Search)}
            <input
                type="text"
                placeholder=placeholder
                class:search-input__field--active=move || !value.get().trim().is_empty()
                class="search-input__field"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon(Icon::X)}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches_is_case_insensitive() {
        let parts = split_matches("Applied Mathematics", "MATH");
        assert_eq!(
            parts,
            vec![("Applied ", false), ("Math", true), ("ematics", false)]
        );
    }

    #[test]
    fn test_split_matches_empty_query() {
        assert_eq!(split_matches("Physics", "  "), vec![("Physics", false)]);
    }

    #[test]
    fn test_split_matches_repeated() {
        let parts = split_matches("abab", "ab");
        assert_eq!(parts, vec![("ab", true), ("ab", true)]);
    }
}
