use crate::response::Response;
use crate::stub::LedgerStub;

/// Function name and arguments of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChaincodeInput {
    pub function: String,
    pub args: Vec<String>,
}

impl ChaincodeInput {
    pub fn new(function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            function: function.into(),
            args,
        }
    }

    /// Split a raw argument vector: the first element names the function,
    /// the rest are its parameters.
    pub fn from_argv(argv: Vec<String>) -> Self {
        let mut argv = argv.into_iter();
        let function = argv.next().unwrap_or_default();
        Self {
            function,
            args: argv.collect(),
        }
    }
}

/// A chaincode the host can instantiate and invoke.
///
/// Implementations keep no state of their own; everything lives behind the
/// stub, which is only valid for the call it was handed to.
pub trait Chaincode: Send + Sync {
    /// Chaincode name, used for logging.
    fn name(&self) -> &str;

    /// Called once when the chaincode is instantiated.
    fn init(&self, stub: &dyn LedgerStub, input: &ChaincodeInput) -> Response;

    /// Called for every transaction.
    fn invoke(&self, stub: &dyn LedgerStub, input: &ChaincodeInput) -> Response;
}
