//! Scripted fakes shared by the crate's unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::BackendError;
use crate::session::{MemoryStorage, SessionStore, TokenStore};
use crate::transport::{HttpBackend, HttpRequest, HttpResponse, Navigator, Transport};

pub type Reply = Result<HttpResponse, BackendError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Backend that answers from a queue and records every request it sees.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedBackend {
    pub fn reply(&self, status: u16, body: Value) {
        self.push(Scripted::Ready(Ok(HttpResponse::new(status, body.to_string()))));
    }

    pub fn reply_text(&self, status: u16, body: &str) {
        self.push(Scripted::Ready(Ok(HttpResponse::new(status, body))));
    }

    pub fn fail(&self, err: BackendError) {
        self.push(Scripted::Ready(Err(err)));
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub fn defer(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(Scripted::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    fn push(&self, scripted: Scripted) {
        self.replies.lock().unwrap().push_back(scripted);
    }
}

impl HttpBackend for ScriptedBackend {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Reply> {
        self.requests.lock().unwrap().push(request);
        let next = self.replies.lock().unwrap().pop_front();
        async move {
            match next {
                Some(Scripted::Ready(reply)) => reply,
                Some(Scripted::Deferred(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(BackendError::Network("deferred reply dropped".to_owned()))),
                None => Err(BackendError::Network("no scripted reply".to_owned())),
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

pub struct Harness {
    pub store: Arc<TokenStore<MemoryStorage>>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        Self { store: Arc::new(TokenStore::default()), navigator: Arc::new(RecordingNavigator::default()) }
    }

    pub fn transport(&self) -> Transport<ScriptedBackend> {
        let store: Arc<dyn SessionStore> = self.store.clone();
        let navigator: Arc<dyn Navigator> = self.navigator.clone();
        Transport::new(ApiConfig::new("http://api.test/api"), ScriptedBackend::default(), store, navigator)
    }
}
