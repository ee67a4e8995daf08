use serde::{Deserialize, Serialize};

/// Описание ошибки от сервера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

/// Конверт ответа источника данных: `{ success, data | error }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorPayload {
                message: message.into(),
            }),
        }
    }

    /// `success:false` и отсутствие данных превращаются в текст ошибки
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("Response contained no data".to_string()),
            (false, _) => Err(self
                .error
                .map(|e| e.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Request failed".to_string())),
        }
    }
}

/// Фаза загрузки дашборда: Idle -> Loading -> {Loaded | Errored}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Токен запроса. Результат применяется, только если токен последний.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query_key: String,
}

impl FetchTicket {
    pub fn query_key(&self) -> &str {
        &self.query_key
    }
}

/// Коллекция экрана вместе с состоянием загрузки
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    phase: LoadPhase,
    records: Vec<T>,
    error: Option<String>,
    generation: u64,
    query_key: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Idle,
            records: Vec::new(),
            error: None,
            generation: 0,
            query_key: None,
        }
    }
}

impl<T> CollectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начать загрузку (монтирование или смена ключа запроса)
    pub fn begin(&mut self, query_key: impl Into<String>) -> FetchTicket {
        let query_key = query_key.into();
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.query_key = Some(query_key.clone());
        FetchTicket {
            generation: self.generation,
            query_key,
        }
    }

    /// Повтор после ошибки с тем же ключом
    pub fn retry(&mut self) -> FetchTicket {
        let key = self.query_key.clone().unwrap_or_default();
        self.begin(key)
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && self.phase == LoadPhase::Loading
    }

    /// Применить результат. Устаревший токен игнорируется, возвращается `false`.
    pub fn complete(&mut self, ticket: &FetchTicket, result: Result<Vec<T>, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
                self.phase = LoadPhase::Loaded;
            }
            Err(message) => {
                self.records = Vec::new();
                self.error = Some(message);
                self.phase = LoadPhase::Errored;
            }
        }
        true
    }

    /// Размонтирование: все выданные токены становятся устаревшими
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Idle;
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query_key(&self) -> Option<&str> {
        self.query_key.as_deref()
    }

    /// Удалить запись локально после успешного удаления на сервере
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !predicate(r));
        before - self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_into_result() {
        assert_eq!(ApiResponse::ok(vec![1, 2]).into_result(), Ok(vec![1, 2]));
        assert_eq!(
            ApiResponse::<Vec<i32>>::failure("Server down").into_result(),
            Err("Server down".to_string())
        );
        let empty: ApiResponse<Vec<i32>> = ApiResponse {
            success: false,
            data: None,
            error: None,
        };
        assert_eq!(empty.into_result(), Err("Request failed".to_string()));
    }

    #[test]
    fn test_envelope_json_shape() {
        let json = serde_json::to_value(ApiResponse::ok(vec!["a"])).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": ["a"]}));
        let parsed: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"success":false,"error":{"message":"nope"}}"#).unwrap();
        assert_eq!(parsed.into_result(), Err("nope".to_string()));
    }

    #[test]
    fn test_state_machine() {
        let mut state: CollectionState<i32> = CollectionState::new();
        assert_eq!(state.phase(), LoadPhase::Idle);

        let ticket = state.begin("program=1");
        assert_eq!(state.phase(), LoadPhase::Loading);
        assert!(state.complete(&ticket, Ok(vec![1, 2, 3])));
        assert_eq!(state.phase(), LoadPhase::Loaded);
        assert_eq!(state.records(), &[1, 2, 3]);
    }

    #[test]
    fn test_failure_empties_records_and_retry_reloads() {
        let mut state: CollectionState<i32> = CollectionState::new();
        let first = state.begin("dept=cs");
        state.complete(&first, Ok(vec![1]));

        let second = state.begin("dept=cs");
        state.complete(&second, Err("HTTP 500".to_string()));
        assert_eq!(state.phase(), LoadPhase::Errored);
        assert!(state.records().is_empty());
        assert_eq!(state.error(), Some("HTTP 500"));

        let retry = state.retry();
        assert_eq!(retry.query_key(), "dept=cs");
        assert_eq!(state.phase(), LoadPhase::Loading);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut state: CollectionState<&str> = CollectionState::new();
        let old = state.begin("semester=1");
        let new = state.begin("semester=2");

        assert!(state.complete(&new, Ok(vec!["new"])));
        assert!(!state.complete(&old, Ok(vec!["old"])));
        assert_eq!(state.records(), &["new"]);
    }

    #[test]
    fn test_cancel_invalidates_outstanding_ticket() {
        let mut state: CollectionState<i32> = CollectionState::new();
        let ticket = state.begin("k");
        state.cancel();
        assert!(!state.complete(&ticket, Ok(vec![1])));
        assert_eq!(state.phase(), LoadPhase::Idle);
        assert!(state.records().is_empty());
    }

    #[test]
    fn test_remove_where() {
        let mut state: CollectionState<i32> = CollectionState::new();
        let ticket = state.begin("k");
        state.complete(&ticket, Ok(vec![1, 2, 3]));
        assert_eq!(state.remove_where(|r| *r == 2), 1);
        assert_eq!(state.records(), &[1, 3]);
    }
}
