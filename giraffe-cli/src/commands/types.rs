//! List the feature type registry

use giraffe_core::all_types;
use serde_json::json;

use crate::error::CliResult;

pub fn execute(as_json: bool) -> CliResult<()> {
    println!("{}", render(as_json)?);
    Ok(())
}

fn render(as_json: bool) -> CliResult<String> {
    let types = all_types();
    log::debug!("Listing {} feature types", types.len());

    if as_json {
        let entries: Vec<_> = types
            .iter()
            .map(|t| json!({"id": t.id, "label": t.label}))
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let lines: Vec<String> = types
        .iter()
        .filter_map(|t| Some(format!("{}\t{}", t.id?, t.label?)))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() {
        let out = render(false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "1\tFeature");
        assert_eq!(lines[3], "4\tRestriction Enzyme");
    }

    #[test]
    fn test_render_json() {
        let out = render(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[4], json!({"id": 5, "label": "Gene"}));
    }
}
