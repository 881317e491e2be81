pub mod call;
pub mod error;
pub mod model;
pub mod registry;

use chaincode_core::{Chaincode, ChaincodeInput, LedgerStub, Response};
use tracing::{info, warn};

pub use call::{ContractCall, INSERT_CONTRACT, QUERY_CONTRACT};
pub use error::ContractError;
pub use model::{Contract, OBJECT_TYPE};
pub use registry::ContractRegistry;

/// The contract chaincode: `insertContract` and `queryContract` over the
/// contract records in the world state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContractChaincode;

impl ContractChaincode {
    pub fn new() -> Self {
        Self
    }
}

impl Chaincode for ContractChaincode {
    fn name(&self) -> &str {
        "contract"
    }

    /// Nothing to seed; instantiation only has to succeed.
    fn init(&self, stub: &dyn LedgerStub, _input: &ChaincodeInput) -> Response {
        info!(tx_id = stub.tx_id(), "chaincode contract init");
        Response::success(None)
    }

    fn invoke(&self, stub: &dyn LedgerStub, input: &ChaincodeInput) -> Response {
        let result = ContractCall::parse(&input.function, &input.args)
            .and_then(|call| ContractRegistry::new(stub).execute(call));

        match result {
            Ok(payload) => Response::success(payload),
            Err(err) => {
                warn!(
                    tx_id = stub.tx_id(),
                    function = %input.function,
                    code = err.error_code(),
                    "{}",
                    err
                );
                Response::error(err.to_string())
            }
        }
    }
}
