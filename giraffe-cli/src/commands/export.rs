//! Export command - build feature records from JSON declarations

use giraffe_core::{parse_declarations, records_to_json, AnyFeature, FeatureDeclaration};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{CliError, CliResult};

pub fn execute(
    config: &Config,
    input: PathBuf,
    output: Option<PathBuf>,
    compact: bool,
) -> CliResult<()> {
    log::info!("Reading feature declarations from: {}", input.display());

    if !input.exists() {
        return Err(CliError::io(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }

    let content = std::fs::read_to_string(&input)?;
    let declarations = parse_declarations(&content)?;
    log::info!("Parsed {} declarations", declarations.len());

    let features = build_all(declarations, &config.features.default_layer)?;
    let aligned = features
        .iter()
        .filter(|f| matches!(f, AnyFeature::Aligned(_)))
        .count();
    log::info!(
        "Built {} features ({} aligned, {} plain)",
        features.len(),
        aligned,
        features.len() - aligned
    );

    let pretty = config.output.pretty && !compact;
    let json = records_to_json(&features, pretty)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            log::info!("Wrote records to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Construct every declaration, stopping at the first invalid one.
fn build_all(declarations: Vec<FeatureDeclaration>, default_layer: &str) -> CliResult<Vec<AnyFeature>> {
    declarations
        .into_iter()
        .enumerate()
        .map(|(index, decl)| {
            decl.build(default_layer)
                .map_err(|source| CliError::feature(index, source))
        })
        .collect()
}
