//! Scripted [`EmployeeBackend`] used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{BackendError, EmployeeBackend};
use crate::domain::EmployeeId;

/// A downstream call observed by [`StubBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Get(EmployeeId),
    Create(Vec<u8>),
    Update(EmployeeId, Vec<u8>),
    Delete(EmployeeId),
}

/// Backend answering every call from a fixed script.
#[derive(Debug)]
pub(crate) struct StubBackend {
    list: Result<Vec<u8>, BackendError>,
    get: Result<Vec<u8>, BackendError>,
    create: Result<Vec<u8>, BackendError>,
    update: Result<(), BackendError>,
    delete: Result<(), BackendError>,
    calls: Mutex<Vec<Call>>,
}

impl Default for StubBackend {
    fn default() -> Self {
        Self {
            list: Ok(b"[]".to_vec()),
            get: Ok(Vec::new()),
            create: Ok(Vec::new()),
            update: Ok(()),
            delete: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubBackend {
    pub(crate) fn with_list(mut self, answer: Result<&[u8], BackendError>) -> Self {
        self.list = answer.map(<[u8]>::to_vec);
        self
    }

    pub(crate) fn with_get(mut self, answer: Result<&[u8], BackendError>) -> Self {
        self.get = answer.map(<[u8]>::to_vec);
        self
    }

    pub(crate) fn with_create(mut self, answer: Result<&[u8], BackendError>) -> Self {
        self.create = answer.map(<[u8]>::to_vec);
        self
    }

    pub(crate) fn with_update(mut self, answer: Result<(), BackendError>) -> Self {
        self.update = answer;
        self
    }

    pub(crate) fn with_delete(mut self, answer: Result<(), BackendError>) -> Self {
        self.delete = answer;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

pub(crate) fn refused() -> BackendError {
    BackendError::Transport("connection refused".to_string())
}

pub(crate) fn status(code: u16) -> BackendError {
    BackendError::Status {
        status: code,
        message: String::new(),
    }
}

#[async_trait]
impl EmployeeBackend for StubBackend {
    async fn list(&self) -> Result<Vec<u8>, BackendError> {
        self.record(Call::List);
        self.list.clone()
    }

    async fn get(&self, id: EmployeeId) -> Result<Vec<u8>, BackendError> {
        self.record(Call::Get(id));
        self.get.clone()
    }

    async fn create(&self, payload: Vec<u8>) -> Result<Vec<u8>, BackendError> {
        self.record(Call::Create(payload));
        self.create.clone()
    }

    async fn update(&self, id: EmployeeId, payload: Vec<u8>) -> Result<(), BackendError> {
        self.record(Call::Update(id, payload));
        self.update.clone()
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), BackendError> {
        self.record(Call::Delete(id));
        self.delete.clone()
    }
}
