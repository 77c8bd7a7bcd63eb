//! Scripted in-memory [`Transport`] used by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};

/// Replays queued outcomes in order and records every request it receives.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.reply_raw(status, &body.to_string())
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies.borrow_mut().push_back(Err(ApiError::Network(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}
