use crate::error::CliError;
use model::{pagination::page::Page, records::record::Record};
use serde::Serialize;
use serde_json::json;

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn print_page(page: &Page, pretty: bool) -> Result<(), CliError> {
    println!("{}", to_json(page, pretty)?);
    Ok(())
}

pub fn print_records(records: &[Record], pretty: bool) -> Result<(), CliError> {
    println!("{}", to_json(&json!({ "records": records }), pretty)?);
    Ok(())
}

pub fn print_record(record: &Record, pretty: bool) -> Result<(), CliError> {
    println!("{}", to_json(record, pretty)?);
    Ok(())
}
