use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;

/// Logs each request line with the status or failure it produced and how long
/// it took.
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        log!(self.level, "begin request {} {}", method, url);

        let started = Instant::now();
        let result = next.run(request, extensions).await;
        let elapsed = started.elapsed().as_millis();

        match result.as_ref() {
            Ok(response) => log!(
                self.level,
                "{} {} -> {} ({} ms, {} bytes)",
                method,
                url,
                response.status(),
                elapsed,
                response
                    .content_length()
                    .map_or_else(|| String::from("?"), |n| n.to_string())
            ),
            Err(e) => log!(self.level, "{} {} failed after {} ms: {}", method, url, elapsed, e),
        }
        result
    }
}
