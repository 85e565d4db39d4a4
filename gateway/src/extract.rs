//! Request extractors

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body whose rejections use the gateway error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
