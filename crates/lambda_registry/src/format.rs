//! `.morph` on-disk format: a hand-rolled line-oriented text format, not
//! TOML or JSON. Fields are fixed-order `key: value` lines followed by an
//! indented `definition:` block and an optional trailing `references:`
//! section.

use lambda_kernel::{parse, pretty};

use crate::error::RegistryError;
use crate::morphism::{CanonicalMorphism, Category};

/// Parses the contents of a `<hash>.morph` file. The `hash` field itself is
/// not read from the body — it is taken from the file name and verified
/// against the recomputed digest by the registry on `register`.
pub fn parse_morph(text: &str) -> Result<CanonicalMorphism, RegistryError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut name = None;
    let mut category = None;
    let mut purity = None;
    let mut definition = None;
    let mut references = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if let Some(rest) = line.strip_prefix("name:") {
            name = Some(rest.trim().to_string());
            i += 1;
        } else if let Some(rest) = line.strip_prefix("category:") {
            category = Some(Category::parse(rest.trim())?);
            i += 1;
        } else if let Some(rest) = line.strip_prefix("purity:") {
            let value: f64 = rest.trim().parse().map_err(|_| RegistryError::InvalidMorphism {
                reason: format!("purity '{}' is not a number", rest.trim()),
            })?;
            purity = Some(value);
            i += 1;
        } else if line.trim() == "definition:" {
            i += 1;
            let mut body = String::new();
            while i < lines.len() && (lines[i].starts_with(' ') || lines[i].starts_with('\t')) {
                if !body.is_empty() {
                    body.push(' ');
                }
                body.push_str(lines[i].trim());
                i += 1;
            }
            let term = parse(body.trim()).map_err(|e| RegistryError::InvalidMorphism {
                reason: format!("definition does not parse: {}", e),
            })?;
            definition = Some(term);
        } else if line.trim() == "references:" {
            i += 1;
            while i < lines.len() && !lines[i].trim().is_empty() {
                references.push(lines[i].trim().to_string());
                i += 1;
            }
        } else {
            // Unknown fields are ignored by the loader.
            i += 1;
        }
    }

    let name = name.ok_or_else(|| RegistryError::InvalidMorphism { reason: "missing name field".to_string() })?;
    let category = category.ok_or_else(|| RegistryError::InvalidMorphism { reason: "missing category field".to_string() })?;
    let purity = purity.ok_or_else(|| RegistryError::InvalidMorphism { reason: "missing purity field".to_string() })?;
    if !(0.0..=1.0).contains(&purity) {
        return Err(RegistryError::InvalidMorphism { reason: format!("purity {} is outside [0, 1]", purity) });
    }
    let definition = definition.ok_or_else(|| RegistryError::InvalidMorphism { reason: "missing definition field".to_string() })?;

    Ok(CanonicalMorphism { hash: String::new(), name, definition, category, purity, references })
}

/// Serializes a morphism back to the `.morph` text format. Fields appear in
/// the fixed order the format requires; the hash is carried only in the
/// file name, never written into the body.
pub fn write_morph(morphism: &CanonicalMorphism) -> String {
    let mut out = String::new();
    out.push_str(&format!("name: {}\n", morphism.name));
    out.push_str(&format!("category: {}\n", morphism.category));
    out.push_str(&format!("purity: {}\n", morphism.purity));
    out.push_str("definition:\n");
    out.push_str(&format!("  {}\n", pretty(&morphism.definition)));
    if !morphism.references.is_empty() {
        out.push_str("references:\n");
        for reference in &morphism.references {
            out.push_str(reference);
            out.push('\n');
        }
    }
    out
}
