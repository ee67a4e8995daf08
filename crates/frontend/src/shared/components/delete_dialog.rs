use crate::shared::icons::icon;
use contracts::shared::confirmation::DeleteConfirmation;
use contracts::shared::presentation::Icon;
use leptos::prelude::*;
use thaw::*;

/// Диалог удаления: кнопка активна, только когда введено имя записи.
///
/// `on_confirm` получает id записи; сам запрос DELETE выполняет экран.
#[component]
pub fn DeleteDialog(
    target: RwSignal<Option<DeleteConfirmation>>,
    on_confirm: Callback<String>,
) -> impl IntoView {
    let typed = RwSignal::new(String::new());

    Effect::new(move |_| {
        let value = typed.get();
        target.update(|t| {
            if let Some(confirm) = t.as_mut() {
                confirm.set_typed(value);
            }
        });
    });

    let close = move || {
        typed.set(String::new());
        target.set(None);
    };

    let confirmed = Signal::derive(move || {
        target.with(|t| t.as_ref().is_some_and(|c| c.is_confirmed()))
    });

    let confirm = move |_| {
        let id = target.with_untracked(|t| t.as_ref().map(|c| c.record_id.clone()));
        if let Some(id) = id {
            if confirmed.get_untracked() {
                on_confirm.run(id);
                close();
            }
        }
    };

    view! {
        <Show when=move || target.with(|t| t.is_some())>
            <div class="modal-overlay">
                <div class="modal" role="dialog">
                    <div class="modal__header">
                        {icon(Icon::Trash)}
                        <span>"Delete record"</span>
                    </div>
                    <div class="modal__body">
                        <p>
                            "Type "
                            <strong>
                                {move || target.with(|t| {
                                    t.as_ref().map(|c| c.expected.clone()).unwrap_or_default()
                                })}
                            </strong>
                            " to confirm."
                        </p>
                        <Input value=typed placeholder="Record name"/>
                    </div>
                    <div class="modal__footer">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close()>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !confirmed.get())
                            on_click=confirm
                        >
                            "Delete"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
