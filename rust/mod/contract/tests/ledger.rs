//! End-to-end: the contract chaincode run by the executor over a redb ledger.

use std::sync::Arc;

use chaincode_contract::{Contract, ContractChaincode, INSERT_CONTRACT, OBJECT_TYPE, QUERY_CONTRACT};
use chaincode_core::{Chaincode, ChaincodeInput, Executor, LedgerStub, Response, TxStub};
use chaincode_kv::{KVStore, RedbStore, create_composite_key};

fn invoke(executor: &Executor, function: &str, args: &[&str]) -> Response {
    let input = ChaincodeInput::new(function, args.iter().map(|s| s.to_string()).collect());
    executor.invoke(&ContractChaincode, &input)
}

fn open(dir: &tempfile::TempDir) -> Executor {
    let store = RedbStore::open(&dir.path().join("ledger.redb")).unwrap();
    Executor::new(Arc::new(store))
}

#[test]
fn insert_query_duplicate_and_missing() {
    let dir = tempfile::tempdir().unwrap();
    let executor = open(&dir);

    let resp = invoke(&executor, INSERT_CONTRACT, &["C1", "Widget", "G1", "ACC1", "100.00"]);
    assert!(resp.is_ok(), "insert failed: {}", resp.message);
    assert!(resp.payload.is_empty());

    let resp = invoke(&executor, QUERY_CONTRACT, &["C1"]);
    assert!(resp.is_ok());
    let contract = Contract::from_slice(&resp.payload).unwrap();
    assert_eq!(
        contract,
        Contract {
            code: "C1".into(),
            goods_name: "Widget".into(),
            goods_code: "G1".into(),
            account_code: "ACC1".into(),
            total_price: "100.00".into(),
        }
    );

    let resp = invoke(&executor, INSERT_CONTRACT, &["C1", "Gadget", "G2", "ACC2", "1.00"]);
    assert!(!resp.is_ok());
    assert_eq!(resp.message, "contract C1 already exists");

    let resp = invoke(&executor, QUERY_CONTRACT, &["C1"]);
    assert_eq!(Contract::from_slice(&resp.payload).unwrap().goods_name, "Widget");

    let resp = invoke(&executor, QUERY_CONTRACT, &["C2"]);
    assert!(!resp.is_ok());
    assert_eq!(resp.message, "contract C2 not found");
}

#[test]
fn failed_invocations_leave_no_state() {
    let dir = tempfile::tempdir().unwrap();
    let executor = open(&dir);

    invoke(&executor, INSERT_CONTRACT, &["C1", "Widget", "G1", "ACC1"]);
    invoke(&executor, INSERT_CONTRACT, &["C1", "Widget", "G1", "ACC1", ""]);
    invoke(&executor, "updateContract", &["C1", "Widget", "G1", "ACC1", "2.00"]);

    let prefix = create_composite_key(OBJECT_TYPE, &[]).unwrap();
    assert!(executor.store().scan(&prefix).unwrap().is_empty());
}

#[test]
fn records_survive_reopening_the_ledger() {
    let dir = tempfile::tempdir().unwrap();
    {
        let executor = open(&dir);
        assert!(executor.init(&ContractChaincode, &ChaincodeInput::default()).is_ok());
        assert!(invoke(&executor, INSERT_CONTRACT, &["C7", "Bolt", "G7", "A7", "0.10"]).is_ok());
    }

    let executor = open(&dir);
    let resp = invoke(&executor, QUERY_CONTRACT, &["C7"]);
    assert_eq!(Contract::from_slice(&resp.payload).unwrap().total_price, "0.10");
}

#[test]
fn concurrent_inserts_of_one_code_commit_once() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn KVStore> = Arc::new(RedbStore::open(&dir.path().join("ledger.redb")).unwrap());
    let insert = |name: &str| {
        ChaincodeInput::new(
            INSERT_CONTRACT,
            vec!["C1".into(), name.into(), "G1".into(), "ACC1".into(), "9.99".into()],
        )
    };

    // Both transactions simulate against the same empty state before either commits.
    let first = TxStub::new(Arc::clone(&store), "tx-first");
    let second = TxStub::new(Arc::clone(&store), "tx-second");
    assert!(ContractChaincode.invoke(&first, &insert("First")).is_ok());
    assert!(ContractChaincode.invoke(&second, &insert("Second")).is_ok());
    assert_eq!(second.tx_id(), "tx-second");

    first.commit().unwrap();
    assert!(second.commit().is_err());

    let key = create_composite_key(OBJECT_TYPE, &["C1"]).unwrap();
    let stored = Contract::from_slice(&store.get(&key).unwrap().unwrap()).unwrap();
    assert_eq!(stored.goods_name, "First");
}
