use chaincode_core::LedgerStub;
use tracing::debug;

use crate::call::ContractCall;
use crate::error::ContractError;
use crate::model::{Contract, OBJECT_TYPE};

/// Contract records in the world state.
///
/// Holds nothing but the stub of the current transaction; every call derives
/// the key, reads or writes through the stub and returns.
pub struct ContractRegistry<'a> {
    stub: &'a dyn LedgerStub,
}

impl<'a> ContractRegistry<'a> {
    pub fn new(stub: &'a dyn LedgerStub) -> Self {
        Self { stub }
    }

    /// Run a parsed call. Inserts return no payload, queries the stored bytes.
    pub fn execute(&self, call: ContractCall) -> Result<Option<Vec<u8>>, ContractError> {
        match call {
            ContractCall::Insert(contract) => self.insert(&contract).map(|()| None),
            ContractCall::Query { code } => self.query(&code).map(Some),
        }
    }

    /// Store a new contract. Fails if a non-empty record already exists
    /// under its code.
    pub fn insert(&self, contract: &Contract) -> Result<(), ContractError> {
        contract.validate()?;
        let key = self.contract_key(&contract.code)?;

        if self.read(&key)?.is_some_and(|bytes| !bytes.is_empty()) {
            return Err(ContractError::AlreadyExists(contract.code.clone()));
        }

        let bytes = contract.to_vec()?;
        self.stub
            .put_state(&key, &bytes)
            .map_err(|e| ContractError::StoreWriteFailure(e.to_string()))?;

        debug!(tx_id = self.stub.tx_id(), code = %contract.code, "contract staged");
        Ok(())
    }

    /// Raw stored record for `code`. Missing and empty records are both
    /// reported as not found.
    pub fn query(&self, code: &str) -> Result<Vec<u8>, ContractError> {
        if code.is_empty() {
            return Err(ContractError::InvalidArgument("code"));
        }
        let key = self.contract_key(code)?;

        match self.read(&key)? {
            Some(bytes) if !bytes.is_empty() => Ok(bytes),
            _ => Err(ContractError::NotFound(code.to_string())),
        }
    }

    fn contract_key(&self, code: &str) -> Result<String, ContractError> {
        self.stub
            .create_composite_key(OBJECT_TYPE, &[code])
            .map_err(|e| ContractError::KeyDerivationFailure(e.to_string()))
    }

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ContractError> {
        self.stub
            .get_state(key)
            .map_err(|e| ContractError::StoreReadFailure(e.to_string()))
    }
}
