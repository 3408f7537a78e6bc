//! Document composition for the billpress pipeline.
//!
//! The composer is pure placeholder substitution: it merges the invoice
//! header, the resolved customer and the paged item tables into a markup
//! document by replacing a closed, fixed set of `{{...}}` tokens. Tokens
//! outside the set pass through untouched, and substitution matches full
//! literal tokens only.
//!
//! Composition is deterministic: the same template and data always produce
//! byte-identical markup.

mod markup;
pub mod template;

pub use template::{PLACEHOLDERS, STRUCTURAL_PLACEHOLDERS, Template};

use billpress_assemble::InvoiceHeader;
use billpress_paginate::Page;
use billpress_resolve::CustomerRecord;
use billpress_types::format_amount;
use log::warn;
use template::token;

/// Currency suffix appended to amount cells unless the run configuration
/// overrides it.
pub const DEFAULT_CURRENCY: &str = "₽";

/// Presentation knobs for composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Symbol appended after unit price and amount cells.
    pub currency: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Merges header, customer and paged tables into the template.
///
/// Each recognized placeholder is replaced in a single pass with its full
/// literal token; `{{total_amount}}` receives the grand total as a grouped
/// two-fraction-digit decimal. A template missing the structural
/// placeholders (`{{tables}}`, `{{total_amount}}`) is reported at warn
/// level and composition proceeds; those values simply never appear.
pub fn compose(
    template: &Template,
    header: &InvoiceHeader,
    customer: &CustomerRecord,
    pages: &[Page<'_>],
    grand_total: f64,
    options: &ComposeOptions,
) -> String {
    for name in template.missing_structural() {
        warn!(
            "Template is missing the structural placeholder '{}'; it will not appear in the output",
            token(name)
        );
    }

    let tables = markup::render_tables(header, customer, pages, options);

    let mut out = template.source().to_string();
    out = out.replace(&token("invoice_id"), header.invoice_id.as_str());
    out = out.replace(&token("invoice_date"), &header.date);
    out = out.replace(&token("customer_name"), &customer.name);
    out = out.replace(&token("customer_email"), &customer.email);
    out = out.replace(&token("customer_phone"), &customer.phone);
    out = out.replace(&token("customer_address"), &customer.address);
    out = out.replace(&token("tables"), &tables);
    out = out.replace(&token("total_amount"), &format_amount(grand_total));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use billpress_assemble::LineItem;
    use billpress_paginate::{grand_total, paginate};
    use billpress_types::Ident;

    fn header() -> InvoiceHeader {
        InvoiceHeader {
            invoice_id: Ident::new("7"),
            customer_id: Some(Ident::new("9")),
            date: "2024-05-05".to_string(),
        }
    }

    fn customer() -> CustomerRecord {
        CustomerRecord {
            name: "ACME Corp".to_string(),
            email: "billing@acme.example".to_string(),
            phone: "+1 555 0100".to_string(),
            address: "1 Industry Way".to_string(),
        }
    }

    fn items() -> Vec<LineItem> {
        vec![
            LineItem {
                product_id: Ident::new("A"),
                name: "Widget".to_string(),
                quantity: 2,
                unit_price: 10.0,
                line_total: 20.0,
            },
            LineItem {
                product_id: Ident::new("B"),
                name: "Gadget".to_string(),
                quantity: 1,
                unit_price: 5.0,
                line_total: 5.0,
            },
        ]
    }

    const FULL_TEMPLATE: &str = "<html><head><title>Invoice {{invoice_id}}</title></head>\
        <body><p>{{invoice_date}}</p>\
        <p>{{customer_name}} / {{customer_email}} / {{customer_phone}} / {{customer_address}}</p>\
        {{tables}}\
        <div class=\"total-section\">Total: {{total_amount}}</div></body></html>";

    #[test]
    fn test_all_placeholders_substituted() {
        let items = items();
        let pages = paginate(&items, 10);
        let total = grand_total(&items);

        let out = compose(
            &Template::new(FULL_TEMPLATE),
            &header(),
            &customer(),
            &pages,
            total,
            &ComposeOptions::default(),
        );

        assert!(out.contains("Invoice 7"));
        assert!(out.contains("2024-05-05"));
        assert!(out.contains("ACME Corp"));
        assert!(out.contains("billing@acme.example"));
        assert!(out.contains("+1 555 0100"));
        assert!(out.contains("1 Industry Way"));
        assert!(out.contains("Widget"));
        assert!(out.contains("Total: 25.00"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_total_amount_has_no_currency_suffix() {
        let items = items();
        let pages = paginate(&items, 10);

        let out = compose(
            &Template::new("{{tables}}|{{total_amount}}|"),
            &header(),
            &customer(),
            &pages,
            grand_total(&items),
            &ComposeOptions::default(),
        );

        // The table cells carry the suffix; the total placeholder does not.
        assert!(out.contains("10.00 ₽"));
        assert!(out.ends_with("|25.00|"));
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let items = items();
        let pages = paginate(&items, 10);

        let out = compose(
            &Template::new("{{tables}} {{total_amount}} {{mystery}} {{invoice_idx}}"),
            &header(),
            &customer(),
            &pages,
            25.0,
            &ComposeOptions::default(),
        );

        assert!(out.contains("{{mystery}}"));
        // A token sharing a prefix with a known one is not a match.
        assert!(out.contains("{{invoice_idx}}"));
    }

    #[test]
    fn test_missing_structural_placeholders_still_compose() {
        let items = items();
        let pages = paginate(&items, 10);

        let out = compose(
            &Template::new("<p>{{customer_name}}</p>"),
            &header(),
            &customer(),
            &pages,
            25.0,
            &ComposeOptions::default(),
        );

        assert_eq!(out, "<p>ACME Corp</p>");
    }

    #[test]
    fn test_composition_is_idempotent() {
        let items = items();
        let pages = paginate(&items, 1);
        let total = grand_total(&items);

        let first = compose(
            &Template::new(FULL_TEMPLATE),
            &header(),
            &customer(),
            &pages,
            total,
            &ComposeOptions::default(),
        );
        let second = compose(
            &Template::new(FULL_TEMPLATE),
            &header(),
            &customer(),
            &pages,
            total,
            &ComposeOptions::default(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_page_list_renders_no_tables() {
        let out = compose(
            &Template::new("[{{tables}}]"),
            &header(),
            &customer(),
            &[],
            0.0,
            &ComposeOptions::default(),
        );
        assert_eq!(out, "[]");
    }
}
