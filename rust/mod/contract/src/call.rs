use crate::error::ContractError;
use crate::model::Contract;

pub const INSERT_CONTRACT: &str = "insertContract";
pub const QUERY_CONTRACT: &str = "queryContract";

/// A validated contract operation.
///
/// Built from the raw function name and string arguments of an invocation;
/// once a `ContractCall` exists its arguments have the right count and none
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    /// `insertContract code goodsName goodsCode accountCode totalPrice`
    Insert(Contract),
    /// `queryContract code`
    Query { code: String },
}

impl ContractCall {
    pub fn parse(function: &str, args: &[String]) -> Result<Self, ContractError> {
        match function {
            INSERT_CONTRACT => {
                let [code, goods_name, goods_code, account_code, total_price] = args else {
                    return Err(arity(INSERT_CONTRACT, 5, args));
                };
                let contract = Contract::new(
                    code.as_str(),
                    goods_name.as_str(),
                    goods_code.as_str(),
                    account_code.as_str(),
                    total_price.as_str(),
                )?;
                Ok(Self::Insert(contract))
            }
            QUERY_CONTRACT => {
                let [code] = args else {
                    return Err(arity(QUERY_CONTRACT, 1, args));
                };
                if code.is_empty() {
                    return Err(ContractError::InvalidArgument("code"));
                }
                Ok(Self::Query { code: code.clone() })
            }
            other => Err(ContractError::UnsupportedOperation(other.to_string())),
        }
    }

    /// Function name this call is invoked by.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Insert(_) => INSERT_CONTRACT,
            Self::Query { .. } => QUERY_CONTRACT,
        }
    }

    /// Contract code the call addresses.
    pub fn code(&self) -> &str {
        match self {
            Self::Insert(contract) => &contract.code,
            Self::Query { code } => code,
        }
    }
}

fn arity(operation: &'static str, expected: usize, args: &[String]) -> ContractError {
    ContractError::InvalidArgumentCount {
        operation,
        expected,
        actual: args.len(),
    }
}
