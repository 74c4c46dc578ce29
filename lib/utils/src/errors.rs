use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use http::status::StatusCode;
use leptos::prelude::*;
use leptos::{component, view, IntoView};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::{InternalErrorIcon, InvalidRequestIcon, NetworkErrorIcon};

const INVALID_REQUEST_MESSAGE: &str = "Sorry, we didn't understand your request.";
const UNAVAILABLE_MESSAGE: &str = "Sorry, we've got noise on the line.";
const REJECTED_MESSAGE: &str = "The server could not process your request.";
const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong.";

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    InvalidRequest(String),
    RequestFailed(String),
    ApiError(u16),
    DecodeError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RequestFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ApiError(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::DecodeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidRequest(_) => String::from(INVALID_REQUEST_MESSAGE),
            AppError::RequestFailed(_) => String::from(UNAVAILABLE_MESSAGE),
            AppError::ApiError(_) => String::from(REJECTED_MESSAGE),
            AppError::DecodeError(_) => String::from(INTERNAL_ERROR_MESSAGE),
        }
    }

    pub fn error_detail(&self) -> String {
        match self {
            AppError::InvalidRequest(detail) => detail.clone(),
            AppError::RequestFailed(detail) => detail.clone(),
            AppError::ApiError(code) => format!("Request rejected with status {code}."),
            AppError::DecodeError(detail) => detail.clone(),
        }
    }

    /// Constructs a new [`AppError::InvalidRequest`] from some other type.
    pub fn new(msg: impl ToString) -> Self {
        Self::InvalidRequest(msg.to_string())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}

impl FromStr for AppError {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => AppError::DecodeError(e.to_string()),
            gloo_net::Error::JsError(e) => AppError::RequestFailed(e.to_string()),
            gloo_net::Error::GlooError(e) => AppError::RequestFailed(e),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::DecodeError(error.to_string())
    }
}

#[component]
pub fn AppErrorIcon(
    app_error: AppError,
) -> impl IntoView {
    match app_error {
        AppError::InvalidRequest(_) => view! { <InvalidRequestIcon/> }.into_any(),
        AppError::RequestFailed(_) => view! { <NetworkErrorIcon/> }.into_any(),
        AppError::ApiError(_) => view! { <NetworkErrorIcon/> }.into_any(),
        AppError::DecodeError(_) => view! { <InternalErrorIcon/> }.into_any(),
    }
}

/// Displays an error
#[component]
pub fn ErrorDisplay(
    error: AppError
) -> impl IntoView {
    let error_string = error.to_string();
    let status_code = error.status_code().as_u16();
    let user_message = error.user_message();

    log::error!("Caught error, status_code: {status_code}, error message: {error_string}");
    view! {
        <div class="w-full flex items-center gap-2 justify-center">
            <AppErrorIcon app_error=error/>
            <div class="flex flex-col">
                <h2 class="text-2xl">{status_code}</h2>
                <h3 class="text-xl">{user_message}</h3>
            </div>
        </div>
    }.into_any()
}
