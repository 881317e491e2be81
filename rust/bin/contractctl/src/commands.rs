//! Subcommand implementations.

use chaincode_contract::{Contract, ContractChaincode, OBJECT_TYPE};
use chaincode_core::{ChaincodeInput, Executor, Response};
use chaincode_kv::{KVStore, create_composite_key, split_composite_key};

pub fn init(executor: &Executor, json_output: bool) -> anyhow::Result<()> {
    let resp = executor.init(&ContractChaincode, &ChaincodeInput::default());
    print_response(&resp, json_output)
}

pub fn invoke(
    executor: &Executor,
    function: String,
    args: Vec<String>,
    json_output: bool,
) -> anyhow::Result<()> {
    let resp = executor.invoke(&ContractChaincode, &ChaincodeInput::new(function, args));
    print_response(&resp, json_output)
}

/// Print every contract record, keyed by the code taken from its ledger key.
pub fn state(executor: &Executor, json_output: bool) -> anyhow::Result<()> {
    let records = contract_records(&**executor.store())?;

    if json_output {
        let items: Vec<serde_json::Value> = records
            .iter()
            .map(|(code, record)| {
                let record = serde_json::from_str(record)
                    .unwrap_or_else(|_| serde_json::Value::String(record.clone()));
                serde_json::json!({ "code": code, "record": record })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No contracts.");
        return Ok(());
    }
    println!("{:<16} {:<20} {:<12} {:<12} {:>12}", "CODE", "GOODS", "GOODS CODE", "ACCOUNT", "TOTAL");
    for (code, record) in &records {
        match Contract::from_slice(record.as_bytes()) {
            Ok(c) => println!(
                "{:<16} {:<20} {:<12} {:<12} {:>12}",
                code, c.goods_name, c.goods_code, c.account_code, c.total_price
            ),
            Err(_) => println!("{:<16} {}", code, record),
        }
    }
    Ok(())
}

/// Collect `(code, rendered record)` for every key under the contract prefix,
/// in key order.
fn contract_records(store: &dyn KVStore) -> anyhow::Result<Vec<(String, String)>> {
    let prefix = create_composite_key(OBJECT_TYPE, &[])?;
    let entries = store.scan(&prefix)?;

    let mut records = Vec::with_capacity(entries.len());
    for (key, bytes) in entries {
        let (_, attributes) = split_composite_key(&key)?;
        let code = attributes.into_iter().next().unwrap_or_default();
        records.push((code, render_payload(&bytes)));
    }
    Ok(records)
}

fn print_response(resp: &Response, json_output: bool) -> anyhow::Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&response_body(resp))?);
    } else if resp.is_ok() && !resp.payload.is_empty() {
        println!("{}", render_payload(&resp.payload));
    } else if resp.is_ok() {
        println!("OK");
    }

    if !resp.is_ok() {
        anyhow::bail!("{} (status {})", resp.message, resp.status);
    }
    Ok(())
}

/// JSON form of a response. A JSON payload is embedded as-is, keeping the
/// stored field order; anything else becomes a string.
fn response_body(resp: &Response) -> serde_json::Value {
    let payload = if resp.payload.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&resp.payload)
            .unwrap_or_else(|_| serde_json::Value::String(render_payload(&resp.payload)))
    };
    serde_json::json!({
        "status": resp.status,
        "message": resp.message,
        "payload": payload,
    })
}

/// Pretty-print JSON payloads; anything else is shown as (lossy) UTF-8.
fn render_payload(bytes: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(bytes).into_owned())
}
