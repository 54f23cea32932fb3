use std::sync::Arc;

use thiserror::Error;
use url::Url;

/// Status code and body of a response that made it back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type HttpClientResult = Result<HttpResponse, HttpClientError>;

pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and report the outcome through `completion`, exactly once,
    /// either before returning or later from another thread.
    fn get(&self, url: &Url, completion: HttpCompletion);
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        (**self).get(url, completion)
    }
}
