//! Permissive registry lookup by id or label

use giraffe_core::{by_id, by_label, TypeChoice};

use crate::error::CliResult;

pub fn execute(key: &str) -> CliResult<()> {
    let choice = resolve(key);
    match (choice.id, choice.label) {
        (Some(id), Some(label)) => println!("{}\t{}", id, label),
        _ => {
            log::warn!("No feature type matches {:?}", key);
            println!("not found");
        }
    }
    Ok(())
}

/// Numeric keys are ids; anything else is a label.
fn resolve(key: &str) -> TypeChoice {
    match key.trim().parse::<u32>() {
        Ok(id) => by_id(id),
        Err(_) => by_label(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_id_and_label() {
        assert_eq!(resolve("5").label, Some("Gene"));
        assert_eq!(resolve("Restriction Enzyme").id, Some(4));
    }

    #[test]
    fn test_resolve_miss() {
        assert_eq!(resolve("999"), TypeChoice::NOT_FOUND);
        assert_eq!(resolve("Nonexistent"), TypeChoice::NOT_FOUND);
    }
}
