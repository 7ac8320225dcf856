//! Request extractors whose rejections render as `{"detail": ...}`.
//!
//! Input-side replacements for axum's `Json`, `Query` and `Path`. Responses
//! still use `axum::Json`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
