use std::sync::Arc;

use chaincode_kv::{KVError, KVStore};
use tracing::{debug, info_span, warn};

use crate::chaincode::{Chaincode, ChaincodeInput};
use crate::error::error_code;
use crate::response::Response;
use crate::stub::TxStub;

/// Generate a new transaction id (UUIDv4, no dashes).
pub fn new_tx_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

#[derive(Debug, Clone, Copy)]
enum TxKind {
    Init,
    Invoke,
}

/// Runs chaincode transactions against a world-state store.
///
/// Each call gets a fresh [`TxStub`]. Error responses discard the staged
/// writes; successful ones are committed, and a commit that loses a read
/// conflict is turned into an error response.
pub struct Executor {
    kv: Arc<dyn KVStore>,
}

impl Executor {
    pub fn new(kv: Arc<dyn KVStore>) -> Self {
        Self { kv }
    }

    pub fn store(&self) -> &Arc<dyn KVStore> {
        &self.kv
    }

    pub fn init(&self, chaincode: &dyn Chaincode, input: &ChaincodeInput) -> Response {
        self.execute(TxKind::Init, chaincode, input)
    }

    pub fn invoke(&self, chaincode: &dyn Chaincode, input: &ChaincodeInput) -> Response {
        self.execute(TxKind::Invoke, chaincode, input)
    }

    fn execute(&self, kind: TxKind, chaincode: &dyn Chaincode, input: &ChaincodeInput) -> Response {
        let tx_id = new_tx_id();
        let span = info_span!(
            "tx",
            tx_id = %tx_id,
            chaincode = chaincode.name(),
            kind = ?kind,
            function = %input.function,
        );
        let _enter = span.enter();

        let stub = TxStub::new(Arc::clone(&self.kv), tx_id);
        let response = match kind {
            TxKind::Init => chaincode.init(&stub, input),
            TxKind::Invoke => chaincode.invoke(&stub, input),
        };

        if !response.is_ok() {
            debug!(status = response.status, "error response, write set discarded");
            return response;
        }

        match stub.commit() {
            Ok(_) => response,
            Err(KVError::Conflict(key)) => {
                warn!(code = error_code::MVCC_READ_CONFLICT, "read conflict on {:?}", key);
                Response::error(format!("MVCC read conflict on key {:?}", key))
            }
            Err(e) => {
                warn!(code = error_code::COMMIT_FAILED, "commit failed: {}", e);
                Response::error(format!("commit failed: {}", e))
            }
        }
    }
}
