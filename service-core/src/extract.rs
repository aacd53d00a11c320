//! Request extractors that report failures as [`AppError`].

use crate::error::AppError;
use axum::extract::FromRequest;

/// JSON body extractor whose rejections render through [`AppError`], so a
/// malformed payload gets the same structured error body as a failed
/// validation.
///
/// ```ignore
/// async fn create(AppJson(input): AppJson<CreateThing>) -> Result<Json<Thing>, AppError> {
///     input.validate()?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
