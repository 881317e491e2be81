pub mod chaincode;
pub mod config;
pub mod error;
pub mod executor;
pub mod response;
pub mod stub;

pub use chaincode::{Chaincode, ChaincodeInput};
pub use config::ServiceConfig;
pub use error::{ConfigError, StubError, error_code};
pub use executor::{Executor, new_tx_id};
pub use response::Response;
pub use stub::{LedgerStub, TxStub};
