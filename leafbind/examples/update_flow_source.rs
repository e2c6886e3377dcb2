//! Example building a nested update request from flat parameters.
//!
//! The schema table below is the kind of artefact a code generator would
//! emit once per API operation; everything after it is generic.

use std::io::{self, Write};

use leafbind::{Binder, Emitter, JsonEmitter, LeafSet, SchemaTable};

const TABLE: &str = r#"{
    "operation": "UpdateFlowSource",
    "leaves": ["FailoverMode", "State", "PrimarySource", "RecoveryWindow"],
    "bindings": {
        "FailoverMode": "SourceFailoverConfig.FailoverMode",
        "State": "SourceFailoverConfig.State",
        "PrimarySource": "SourceFailoverConfig.SourcePriority.PrimarySource",
        "RecoveryWindow": "SourceFailoverConfig.RecoveryWindow"
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let schema = SchemaTable::from_json_str(TABLE)?.into_schema()?;
    let binder = Binder::new(schema);

    // Only three of the four declared parameters are supplied; the binder
    // materialises exactly the sub-objects their paths require.
    let mut leaves = LeafSet::new();
    leaves.set("FailoverMode", "MERGE");
    leaves.set("PrimarySource", "camera-1");
    leaves.set("RecoveryWindow", 0);

    let request = JsonEmitter.emit(binder.bind(&leaves));
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&request)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::TABLE;
    use anyhow::{Result, ensure};
    use leafbind::SchemaTable;

    #[test]
    fn embedded_table_promotes_cleanly() -> Result<()> {
        let schema = SchemaTable::from_json_str(TABLE)?.into_schema()?;
        ensure!(schema.operation() == "UpdateFlowSource");
        ensure!(schema.specs().len() == 4);
        Ok(())
    }
}
