pub mod reqwest_client;
pub mod traits;

pub use reqwest_client::ReqwestHttpClient;
pub use traits::{HttpClient, HttpClientError, HttpClientResult, HttpCompletion, HttpResponse};

#[cfg(test)]
pub use traits::MockHttpClient;
