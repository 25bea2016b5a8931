use anyhow::Result;
use pipl_protocol::records_schema;

pub fn execute() -> Result<()> {
    let schema = records_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
