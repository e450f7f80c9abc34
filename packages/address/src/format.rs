//! Assembling structured fields back into a single line.

use us_address_models::{AddressFields, ParsedAddress};

/// Joins address fields into `"address1 address2, city, STATE ZIP"`.
///
/// Missing (empty) pieces are dropped rather than rejected: the street
/// segment needs `address1`, and the state/ZIP segment needs both the state
/// and the ZIP. Nothing is validated.
#[must_use]
pub fn format_address(fields: &AddressFields) -> String {
    let mut segments = Vec::with_capacity(3);

    if !fields.address1.is_empty() {
        match fields.address2.as_deref() {
            Some(address2) if !address2.is_empty() => {
                segments.push(format!("{} {address2}", fields.address1));
            }
            _ => segments.push(fields.address1.clone()),
        }
    }

    if !fields.city.is_empty() {
        segments.push(fields.city.clone());
    }

    if !fields.state.is_empty() && !fields.zip.is_empty() {
        segments.push(format!("{} {}", fields.state, fields.zip));
    }

    segments.join(", ")
}

/// Formats a parsed address as a single line. The county is not included.
#[must_use]
pub fn format_parsed(address: &ParsedAddress) -> String {
    format_address(&address.to_fields())
}
