//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dnsimple::{
    AccessToken, BaseUrl, Client, DnsimpleConfig, HttpResponse, Transport, TransportError,
    TransportRequest,
};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Builds a client that talks to the given mock server over real HTTP.
pub fn client_for(server: &MockServer) -> Client {
    let config = DnsimpleConfig::builder()
        .access_token(AccessToken::new(TOKEN).unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();
    Client::new(config).unwrap()
}

/// A transport that answers from a queue and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<Vec<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a response. Responses are returned in the order they were queued.
    pub fn respond(&self, code: u16, body: &str) {
        self.respond_with_headers(code, HashMap::new(), body);
    }

    pub fn respond_with_headers(&self, code: u16, headers: HashMap<String, Vec<String>>, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push(Ok(HttpResponse::new(code, headers, body)));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.lock().unwrap().push(Err(error));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        assert!(!responses.is_empty(), "unexpected request, no response queued");
        responses.remove(0)
    }
}

/// Builds a client backed by `transport` with the production base URL.
pub fn scripted_client(transport: &Arc<ScriptedTransport>) -> Client {
    let config = DnsimpleConfig::builder()
        .access_token(AccessToken::new(TOKEN).unwrap())
        .build();
    Client::with_transport(config, transport.clone())
}
