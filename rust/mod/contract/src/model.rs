use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Object type of contract composite keys: `\0contract\0{code}\0`.
pub const OBJECT_TYPE: &str = "contract";

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// A purchase contract as stored in the ledger.
///
/// Stored as JSON with camelCase keys in declaration order:
///
/// ```json
/// {"code":"C1","goodsName":"Widget","goodsCode":"G1","accountCode":"ACC1","totalPrice":"100.00"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Unique contract code; the ledger key is derived from it.
    pub code: String,
    pub goods_name: String,
    pub goods_code: String,
    /// Account the goods are bought for.
    pub account_code: String,
    /// Decimal amount kept as text, exactly as submitted.
    pub total_price: String,
}

impl Contract {
    /// Build a contract, rejecting empty fields.
    pub fn new(
        code: impl Into<String>,
        goods_name: impl Into<String>,
        goods_code: impl Into<String>,
        account_code: impl Into<String>,
        total_price: impl Into<String>,
    ) -> Result<Self, ContractError> {
        let contract = Self {
            code: code.into(),
            goods_name: goods_name.into(),
            goods_code: goods_code.into(),
            account_code: account_code.into(),
            total_price: total_price.into(),
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Check that every field is non-empty. Fields are checked in wire order
    /// and the first empty one is reported by its JSON name.
    pub fn validate(&self) -> Result<(), ContractError> {
        let fields = [
            ("code", &self.code),
            ("goodsName", &self.goods_name),
            ("goodsCode", &self.goods_code),
            ("accountCode", &self.account_code),
            ("totalPrice", &self.total_price),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(ContractError::InvalidArgument(name)),
            None => Ok(()),
        }
    }

    /// Decode a stored record, e.g. a `queryContract` payload.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, ContractError> {
        serde_json::to_vec(self).map_err(|e| ContractError::SerializationFailure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Contract {
        Contract::new("C1", "Widget", "G1", "ACC1", "100.00").unwrap()
    }

    #[test]
    fn wire_format_uses_camel_case_in_field_order() {
        let json = String::from_utf8(widget().to_vec().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"code":"C1","goodsName":"Widget","goodsCode":"G1","accountCode":"ACC1","totalPrice":"100.00"}"#
        );
    }

    #[test]
    fn decodes_stored_record() {
        let bytes = br#"{"code":"C9","goodsName":"Bolt","goodsCode":"G9","accountCode":"A9","totalPrice":"0.50"}"#;
        let contract = Contract::from_slice(bytes).unwrap();
        assert_eq!(contract.code, "C9");
        assert_eq!(contract.total_price, "0.50");
    }

    #[test]
    fn first_empty_field_is_reported() {
        let err = Contract::new("C1", "", "G1", "", "1").unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument("goodsName")));

        let mut contract = widget();
        contract.total_price.clear();
        assert!(matches!(
            contract.validate(),
            Err(ContractError::InvalidArgument("totalPrice"))
        ));
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(Contract::new(" ", " ", " ", " ", " ").is_ok());
    }
}
