// Common test utilities shared across test files

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use cloudasset::{
    AssetServiceClient, ClientConfig, OperationHandle, OperationPoller, RequestMetadata, RpcError,
    RpcMethod, Transport,
};

/// One call observed by the mock transport.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: RpcMethod,
    pub request: Value,
    pub metadata: RequestMetadata,
}

/// Transport double: records every call and replays queued responses.
pub struct MockTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<Result<Value, RpcError>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub fn respond_with(self, response: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail_with(self, error: RpcError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call; panics if the count differs.
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.recorded_calls();
        assert_eq!(calls.len(), 1, "expected exactly one rpc call");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(
        &self,
        method: RpcMethod,
        request: Value,
        metadata: &RequestMetadata,
    ) -> Result<Value, RpcError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            request,
            metadata: metadata.clone(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

/// Poller double: records waited-on handles and replays one response.
pub struct MockPoller {
    waited: Mutex<Vec<OperationHandle>>,
    response: Mutex<Option<Result<Value, RpcError>>>,
}

#[allow(dead_code)]
impl MockPoller {
    pub fn new() -> Self {
        Self {
            waited: Mutex::new(Vec::new()),
            response: Mutex::new(None),
        }
    }

    pub fn resolve_with(self, response: Value) -> Self {
        *self.response.lock().unwrap() = Some(Ok(response));
        self
    }

    pub fn waited_handles(&self) -> Vec<OperationHandle> {
        self.waited.lock().unwrap().clone()
    }
}

#[async_trait]
impl OperationPoller for MockPoller {
    async fn wait(&self, operation: &OperationHandle) -> Result<Value, RpcError> {
        self.waited.lock().unwrap().push(operation.clone());
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(Value::Null))
    }
}

/// Build a client over the given doubles with default configuration.
#[allow(dead_code)]
pub fn test_client(
    transport: Arc<MockTransport>,
    poller: Arc<MockPoller>,
) -> AssetServiceClient {
    AssetServiceClient::new(transport, poller, ClientConfig::default())
}
