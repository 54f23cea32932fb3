//! Remote feed loading.
//!
//! A [`RemoteFeedLoader`] asks an [`HttpClient`] for one URL, decodes the
//! JSON response into [`FeedItem`]s and hands a single [`LoadResult`] to the
//! caller's completion. Dropping the loader before the response arrives
//! means the completion is never called.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;

pub use api::RemoteFeedLoader;
pub use domain::{FeedItem, FeedLoader, LoadCompletion, LoadResult};
pub use errors::LoadError;
pub use http::{HttpClient, HttpClientError, HttpClientResult, HttpResponse, ReqwestHttpClient};
