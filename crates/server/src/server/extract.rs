use axum::extract::{FromRequest, FromRequestParts};

use crate::error::RequestError;

/// JSON body extractor whose rejections render as [`RequestError`], so a
/// malformed body always yields a 422 with the usual error payload.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RequestError))]
pub struct AppJson<T>(pub T);

/// Path extractor with the same rejection handling as [`AppJson`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(RequestError))]
pub struct AppPath<T>(pub T);
