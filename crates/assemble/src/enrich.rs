//! Line-item enrichment: joining raw items against the product reference.
//!
//! Enrichment applies two fixed policies:
//!
//! - An item whose product cannot be resolved is **dropped**, never priced
//!   at zero. The drop is logged at warn level so an incomplete invoice is
//!   observable, but it is not an error.
//! - Quantity interpretation follows the run's [`QuantityPolicy`]. Exactly
//!   one policy applies per run; the two are never mixed.

use crate::draft::RawLineItem;
use crate::error::AssembleError;
use billpress_resolve::ReferenceResolver;
use billpress_types::Ident;
use log::warn;
use serde_json::Value;

/// How a malformed or non-positive quantity is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityPolicy {
    /// Read bad quantities as 1, logged at warn level.
    #[default]
    Lenient,
    /// Fail the run with [`AssembleError::InvalidQuantity`].
    Strict,
}

/// A line item joined against its product record, with the derived total.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: Ident,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Resolves each raw item against the product reference and computes its
/// line total.
///
/// Items whose product id is missing or matches no reference record are
/// dropped. Under [`QuantityPolicy::Strict`] the first invalid quantity
/// aborts enrichment; under [`QuantityPolicy::Lenient`] it reads as 1.
/// An absent quantity reads as 1 under both policies.
pub fn enrich(
    raw_items: &[RawLineItem],
    resolver: &ReferenceResolver,
    policy: QuantityPolicy,
) -> Result<Vec<LineItem>, AssembleError> {
    let mut items = Vec::with_capacity(raw_items.len());

    for raw in raw_items {
        let Some(product_id) = raw.product_id.as_ref() else {
            warn!("Dropping line item with no product id");
            continue;
        };

        let Some(product) = resolver.product(product_id) else {
            warn!(
                "Dropping line item: product '{}' not found in any reference source",
                product_id
            );
            continue;
        };

        let quantity = interpret_quantity(raw.quantity.as_ref(), product_id, policy)?;
        let line_total = product.price * f64::from(quantity);

        items.push(LineItem {
            product_id: product_id.clone(),
            name: product.name,
            quantity,
            unit_price: product.price,
            line_total,
        });
    }

    Ok(items)
}

fn interpret_quantity(
    value: Option<&Value>,
    product_id: &Ident,
    policy: QuantityPolicy,
) -> Result<u32, AssembleError> {
    // Absent quantities default to 1 under both policies.
    let Some(value) = value else {
        return Ok(1);
    };

    match parse_quantity(value) {
        Some(quantity) => Ok(quantity),
        None => match policy {
            QuantityPolicy::Lenient => {
                warn!(
                    "Invalid quantity {} for product '{}', reading as 1",
                    value, product_id
                );
                Ok(1)
            }
            QuantityPolicy::Strict => Err(AssembleError::InvalidQuantity {
                product: product_id.to_string(),
                value: value.to_string(),
            }),
        },
    }
}

/// Accepts integers of at least 1, encoded as JSON numbers or numeric
/// strings (the CSV case). Everything else is invalid: zero, negatives,
/// fractional numbers, non-numeric text.
fn parse_quantity(value: &Value) -> Option<u32> {
    let quantity = match value {
        Value::Null => return Some(1),
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            // An empty cell is an absent quantity, not a malformed one.
            if trimmed.is_empty() {
                return Some(1);
            }
            trimmed.parse::<u64>().ok()?
        }
        _ => return None,
    };

    if quantity >= 1 {
        u32::try_from(quantity).ok()
    } else {
        None
    }
}
