use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tagschema_config::TagSchemaConfig;
use tagschema_core::{Schema, TypeDesc};

use crate::cli::GenerateArgs;
use crate::output;

/// Handle `tagschema generate`.
pub fn handle(args: &GenerateArgs, config: &TagSchemaConfig) -> anyhow::Result<()> {
    let root = match &args.input {
        Some(path) => read_descriptor_file(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read descriptor from stdin")?;
            parse_json_descriptor(&text)?
        }
    };

    let schema = generate(root.as_ref(), config)?;
    output::output(&schema, config.output.pretty && !args.compact)
}

/// Run the configured generator over a parsed root descriptor.
pub fn generate(root: Option<&TypeDesc>, config: &TagSchemaConfig) -> anyhow::Result<Schema> {
    let generator = config.generator.generator();
    tracing::debug!(
        naming = %generator.tag_keys().naming,
        validation = %generator.tag_keys().validation,
        "generating schema"
    );
    Ok(generator.generate(root)?)
}

/// Read a descriptor file, choosing the format by extension.
pub fn read_descriptor_file(path: &Path) -> anyhow::Result<Option<TypeDesc>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read descriptor '{}'", path.display()))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        let desc = toml::from_str::<TypeDesc>(&text)
            .with_context(|| format!("invalid TOML descriptor '{}'", path.display()))?;
        Ok(Some(desc))
    } else {
        parse_json_descriptor(&text)
            .with_context(|| format!("invalid JSON descriptor '{}'", path.display()))
    }
}

/// Parse a JSON descriptor; a `null` document is the nil root.
pub fn parse_json_descriptor(text: &str) -> anyhow::Result<Option<TypeDesc>> {
    serde_json::from_str(text).context("descriptor is not a valid type description")
}
