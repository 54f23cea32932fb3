use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::http::traits::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};

/// [`HttpClient`] backed by a blocking reqwest client. Every request runs on
/// its own background thread, so `get` returns immediately.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn perform(client: &Client, url: Url) -> HttpClientResult {
        let response = client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let client = self.client.clone();
        let url = url.clone();

        thread::spawn(move || {
            tracing::debug!(url = %url, "Sending GET request");

            let result = Self::perform(&client, url.clone());
            match &result {
                Ok(response) => {
                    tracing::debug!(
                        url = %url,
                        status = response.status,
                        bytes = response.body.len(),
                        "Received response"
                    );
                }
                Err(e) => {
                    tracing::debug!(url = %url, error = %e, "Request failed");
                }
            }

            completion(result);
        });
    }
}
