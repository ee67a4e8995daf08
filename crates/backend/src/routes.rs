use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::data::store::MockStore;

/// Конфигурация всех роутов приложения
pub fn configure_routes(store: MockStore) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ACADEMICS
        // ========================================
        .route("/api/programs", get(handlers::a007_subject::list_programs))
        .route("/api/subjects", get(handlers::a007_subject::list_subjects))
        .route("/api/students", get(handlers::a001_student::list))
        // ========================================
        // STAFF WORK
        // ========================================
        .route("/api/tasks", get(handlers::a002_task::list))
        .route(
            "/api/tasks/:id",
            axum::routing::delete(handlers::a002_task::delete),
        )
        .route("/api/departments", get(handlers::a006_department::list))
        .route("/api/leaves", get(handlers::a003_leave::list))
        .route("/api/timesheets", get(handlers::a008_timesheet::list))
        // ========================================
        // ADMINISTRATION
        // ========================================
        .route("/api/documents", get(handlers::a004_document::list))
        .route(
            "/api/documents/:id",
            axum::routing::delete(handlers::a004_document::delete),
        )
        .route("/api/users", get(handlers::a005_user::list))
        .route(
            "/api/users/:id",
            axum::routing::delete(handlers::a005_user::delete),
        )
        .route("/api/api-endpoints", get(handlers::a009_api_endpoint::list))
        .with_state(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures::Fixtures;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use contracts::domain::a001_student::aggregate::Student;
    use contracts::domain::a002_task::aggregate::Task;
    use contracts::domain::a004_document::aggregate::Document;
    use contracts::domain::a005_user::aggregate::StaffUser;
    use contracts::domain::a007_subject::aggregate::Subject;
    use contracts::shared::load_state::ApiResponse;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    async fn call<T: DeserializeOwned + Default>(
        app: Router,
        method: Method,
        uri: &str,
    ) -> (StatusCode, ApiResponse<T>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn app() -> (Router, MockStore) {
        let store = MockStore::new(Fixtures::embedded());
        (configure_routes(store.clone()), store)
    }

    #[tokio::test]
    async fn test_students_filtered_by_program() {
        let (app, store) = app();
        let expected = store
            .read(|f| f.students.iter().filter(|s| s.program == "mba").count())
            .unwrap();

        let (status, body) =
            call::<Vec<Student>>(app, Method::GET, "/api/students?program=mba&semester=all").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        let students = body.data.unwrap();
        assert_eq!(students.len(), expected);
        assert!(students.iter().all(|s| s.program == "mba"));
    }

    #[tokio::test]
    async fn test_delete_document_then_missing() {
        let (app, store) = app();

        let (status, body) =
            call::<String>(app.clone(), Method::DELETE, "/api/documents/doc-3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.as_deref(), Some("doc-3"));

        let (status, body) = call::<String>(app.clone(), Method::DELETE, "/api/documents/doc-3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert_eq!(body.error.unwrap().message, "Document doc-3 not found");

        let (_, body) = call::<Vec<Document>>(app, Method::GET, "/api/documents").await;
        assert_eq!(body.data.unwrap().len(), 11);
        assert_eq!(store.read(|f| f.documents.len()).unwrap(), 11);
    }

    #[tokio::test]
    async fn test_tasks_filtered_by_department() {
        let (app, store) = app();
        let (total, science) = store
            .read(|f| {
                let science = f.tasks.iter().filter(|t| t.department == "Science").count();
                (f.tasks.len(), science)
            })
            .unwrap();
        assert!(science > 0 && science < total);

        let (status, body) =
            call::<Vec<Task>>(app.clone(), Method::GET, "/api/tasks?department=Science").await;
        assert_eq!(status, StatusCode::OK);
        let tasks = body.data.unwrap();
        assert_eq!(tasks.len(), science);
        assert!(tasks.iter().all(|t| t.department == "Science"));

        // сброс фильтра на панели отправляет пустое значение или "all"
        for uri in ["/api/tasks?department=all", "/api/tasks?department=", "/api/tasks"] {
            let (_, body) = call::<Vec<Task>>(app.clone(), Method::GET, uri).await;
            assert_eq!(body.data.unwrap().len(), total, "{}", uri);
        }

        let (_, body) =
            call::<Vec<Task>>(app, Method::GET, "/api/tasks?department=Nowhere").await;
        assert!(body.success);
        assert!(body.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subjects_filtered_by_program_and_semester() {
        let (app, store) = app();
        let expected = store
            .read(|f| {
                f.subjects
                    .iter()
                    .filter(|s| s.program_id == "btech" && s.semester == "3")
                    .count()
            })
            .unwrap();
        assert!(expected > 0);

        let (status, body) = call::<Vec<Subject>>(
            app.clone(),
            Method::GET,
            "/api/subjects?program=btech&semester=3",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let subjects = body.data.unwrap();
        assert_eq!(subjects.len(), expected);
        assert!(subjects
            .iter()
            .all(|s| s.program_id == "btech" && s.semester == "3"));

        let all_btech = store
            .read(|f| f.subjects.iter().filter(|s| s.program_id == "btech").count())
            .unwrap();
        let (_, body) = call::<Vec<Subject>>(
            app,
            Method::GET,
            "/api/subjects?program=btech&semester=all",
        )
        .await;
        assert_eq!(body.data.unwrap().len(), all_btech);
    }

    #[tokio::test]
    async fn test_delete_task_then_missing() {
        let (app, store) = app();
        let before = store.read(|f| f.tasks.len()).unwrap();

        let (status, body) = call::<String>(app.clone(), Method::DELETE, "/api/tasks/task-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.as_deref(), Some("task-1"));

        let (status, body) = call::<String>(app.clone(), Method::DELETE, "/api/tasks/task-1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert!(body.data.is_none());
        assert_eq!(body.error.unwrap().message, "Task task-1 not found");

        let (_, body) = call::<Vec<Task>>(app, Method::GET, "/api/tasks").await;
        let tasks = body.data.unwrap();
        assert_eq!(tasks.len(), before - 1);
        assert!(tasks.iter().all(|t| t.id != "task-1"));
    }

    #[tokio::test]
    async fn test_delete_user_then_missing() {
        let (app, store) = app();
        let before = store.read(|f| f.users.len()).unwrap();

        let (status, body) = call::<String>(app.clone(), Method::DELETE, "/api/users/user-2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.as_deref(), Some("user-2"));

        let (status, body) = call::<String>(app.clone(), Method::DELETE, "/api/users/user-2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert_eq!(body.error.unwrap().message, "User user-2 not found");

        let (status, body) = call::<String>(app.clone(), Method::DELETE, "/api/users/nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.unwrap().message, "User nobody not found");

        let (_, body) = call::<Vec<StaffUser>>(app, Method::GET, "/api/users").await;
        assert_eq!(body.data.unwrap().len(), before - 1);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
