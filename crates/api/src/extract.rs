//! Request extractors whose rejections are answered with the JSON error body
//! instead of axum's plain-text one.

use axum::extract::{FromRequest, FromRequestParts};

use crate::middleware::error_handling::AppError;

/// `axum::Json` with rejections mapped to [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with rejections mapped to [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::extract::Query` with rejections mapped to [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
