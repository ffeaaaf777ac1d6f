//! Schema command - print the format of `reports/index.json`

use crate::core::ReportIndex;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = schema_for!(ReportIndex);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
