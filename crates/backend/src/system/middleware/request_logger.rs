use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Пишет в tracing длительность, размер ответа, статус, метод и путь.
/// Неуспешные ответы логируются уровнем warn.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{:>5}ms | body error: {} | {} {:>6} {}",
                start.elapsed().as_millis(),
                e,
                parts.status.as_u16(),
                method,
                uri
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let duration = start.elapsed().as_millis();
    if parts.status.is_success() {
        tracing::info!(
            "{:>5}ms | {:>8} B | {} {:>6} {}",
            duration,
            bytes.len(),
            parts.status.as_u16(),
            method,
            uri
        );
    } else {
        tracing::warn!(
            "{:>5}ms | {:>8} B | {} {:>6} {}",
            duration,
            bytes.len(),
            parts.status.as_u16(),
            method,
            uri
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
