use dioxus::prelude::*;

use services::DirectoryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Network,
    NotFound,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Network => "Could not reach the backend. Please try again.",
            ViewError::NotFound => "That university does not exist.",
        }
    }

    #[must_use]
    pub fn from_directory(err: &DirectoryError) -> Self {
        if err.is_not_found() {
            ViewError::NotFound
        } else {
            ViewError::Network
        }
    }
}

/// Loading lifecycle for view data. `Ready` with an empty payload means
/// "no matches", which is distinct from `Idle`/`Loading` ("not yet computed").
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Network),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
