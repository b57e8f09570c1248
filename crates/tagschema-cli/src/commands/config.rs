use tagschema_config::TagSchemaConfig;

use crate::output;

/// Handle `tagschema config`.
pub fn handle(config: &TagSchemaConfig) -> anyhow::Result<()> {
    output::output(config, config.output.pretty)
}
