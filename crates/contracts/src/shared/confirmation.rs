/// Подтверждение удаления вводом имени записи.
///
/// Пароли на клиенте не проверяются: диалог только защищает от случайного
/// клика, а право на удаление проверяет сервер.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub record_id: String,
    pub expected: String,
    pub typed: String,
}

impl DeleteConfirmation {
    pub fn new(record_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            expected: display_name.into(),
            typed: String::new(),
        }
    }

    pub fn set_typed(&mut self, value: impl Into<String>) {
        self.typed = value.into();
    }

    /// Введенное имя совпадает с именем записи (без пробелов по краям)
    pub fn is_confirmed(&self) -> bool {
        let expected = self.expected.trim();
        !expected.is_empty() && self.typed.trim() == expected
    }
}
