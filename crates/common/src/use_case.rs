//! Application use-case contracts.

use async_trait::async_trait;

/// A single application operation.
///
/// Expected domain failures (validation, not found) must be encoded in
/// `Response`, typically as an [`Either`](crate::Either) whose `Left` carries a
/// [`UseCaseError`]. Only infrastructure faults travel through an outer
/// `Result`.
#[async_trait]
pub trait UseCase<Request>: Send + Sync
where
    Request: Send + 'static,
{
    type Response: Send;

    async fn execute(&self, request: Request) -> Self::Response;
}

/// A named, user-facing reason a use case failed.
pub trait UseCaseError: std::error::Error + Send + Sync {
    /// Short machine-readable name of the failure, e.g. `"CatNotFoundError"`.
    fn name(&self) -> &'static str;

    /// Human-readable message shown to callers.
    fn message(&self) -> String {
        self.to_string()
    }
}
