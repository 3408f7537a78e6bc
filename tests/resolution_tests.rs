mod common;

use billpress::{Ident, PipelineBuilder, PipelineError};
use common::fixtures::*;
use common::{TestResult, generate_invoice};
use std::fs;
use std::path::Path;

fn build_and_generate(dir: &Path, invoice_id: &str) -> Result<(), PipelineError> {
    let pipeline = PipelineBuilder::new()
        .with_data_file(dir.join("invoices.csv"))
        .with_template_file(dir.join("invoice.html"))
        .with_output_dir(dir.join("output"))
        .build()?;
    pipeline.generate_to_dir(&Ident::new(invoice_id))?;
    Ok(())
}

#[test]
fn test_flat_reference_wins_over_structured() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    write_standard_dataset(dir.path())?;
    // A structured source contradicting the flat one on product 101
    fs::write(
        dir.path().join("product.json"),
        r#"[{ "product_id": 101, "name": "Widget (revised)", "price": 99.0 }]"#,
    )?;

    let html = generate_invoice(dir.path(), "invoices.csv", "1")?;

    assert_markup_contains!(html, "Widget");
    assert_markup_not_contains!(html, "Widget (revised)");
    assert_markup_not_contains!(html, "99.00");
    assert_markup_contains!(html, "Total due: 25.00");
    Ok(())
}

#[test]
fn test_structured_reference_used_without_flat() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    write_flat_invoices(dir.path())?;
    write_customers(dir.path())?;
    write_template(dir.path())?;
    fs::write(
        dir.path().join("product.json"),
        r#"[
            { "product_id": 101, "name": "Widget", "price": 10.0 },
            { "product_id": 102, "name": "Gadget", "price": 5.0 }
        ]"#,
    )?;

    let html = generate_invoice(dir.path(), "invoices.csv", "1")?;
    assert_markup_contains!(html, "Widget");
    assert_markup_contains!(html, "Total due: 25.00");
    Ok(())
}

#[test]
fn test_unresolvable_product_is_dropped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    write_standard_dataset(dir.path())?;
    // Append a line item for a product no reference source knows
    fs::write(
        dir.path().join("invoices.csv"),
        "invoice_id,customer_id,date,product_id,quantity\n\
         1,1,2024-03-15,101,2\n\
         1,1,2024-03-15,102,1\n\
         1,1,2024-03-15,999,4\n",
    )?;

    let html = generate_invoice(dir.path(), "invoices.csv", "1")?;

    // The dropped item contributes neither a row nor an amount
    assert_markup_contains!(html, "Total due: 25.00");
    // One thead row plus the two resolvable items
    assert_eq!(html.occurrences("<tr>"), 3, "dropped item must not produce a row");
    assert_markup_not_contains!(html, "<td class=\"text-center\">3</td>");
    Ok(())
}

#[test]
fn test_invoice_with_no_resolvable_products_fails() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    write_standard_dataset(dir.path())?;
    fs::write(
        dir.path().join("invoices.csv"),
        "invoice_id,customer_id,date,product_id,quantity\n\
         1,1,2024-03-15,777,1\n\
         1,1,2024-03-15,888,2\n",
    )?;

    let result = build_and_generate(dir.path(), "1");
    assert!(matches!(result, Err(PipelineError::EmptyInvoice(id)) if id.as_str() == "1"));
    Ok(())
}

#[test]
fn test_unknown_customer_fails() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    write_standard_dataset(dir.path())?;
    fs::write(
        dir.path().join("invoices.csv"),
        "invoice_id,customer_id,date,product_id,quantity\n\
         1,42,2024-03-15,101,2\n",
    )?;

    let result = build_and_generate(dir.path(), "1");
    assert!(matches!(
        result,
        Err(PipelineError::CustomerNotFound(id)) if id.as_str() == "42"
    ));
    Ok(())
}

#[test]
fn test_blank_customer_id_fails() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    write_standard_dataset(dir.path())?;
    fs::write(
        dir.path().join("invoices.csv"),
        "invoice_id,customer_id,date,product_id,quantity\n\
         1,,2024-03-15,101,2\n",
    )?;

    let result = build_and_generate(dir.path(), "1");
    assert!(matches!(result, Err(PipelineError::MissingCustomerId(_))));
    Ok(())
}

#[test]
fn test_numeric_and_string_ids_cross_match() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    write_template(dir.path())?;
    write_customers(dir.path())?;
    // CSV cells are strings; the JSON reference uses bare numbers
    fs::write(
        dir.path().join("invoices.csv"),
        "invoice_id,customer_id,date,product_id,quantity\n\
         7,1,2024-07-01,205,3\n",
    )?;
    fs::write(
        dir.path().join("product.json"),
        r#"[{ "product_id": 205, "name": "Flux Capacitor", "price": 8.0 }]"#,
    )?;

    let html = generate_invoice(dir.path(), "invoices.csv", "7")?;
    assert_markup_contains!(html, "Flux Capacitor");
    assert_markup_contains!(html, "Total due: 24.00");
    Ok(())
}

#[test]
fn test_product_without_name_uses_placeholder() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    write_template(dir.path())?;
    write_customers(dir.path())?;
    fs::write(
        dir.path().join("invoices.csv"),
        "invoice_id,customer_id,date,product_id,quantity\n\
         1,1,2024-03-15,300,1\n",
    )?;
    fs::write(
        dir.path().join("product.json"),
        r#"[{ "product_id": 300, "price": 4.5 }]"#,
    )?;

    let html = generate_invoice(dir.path(), "invoices.csv", "1")?;
    assert_markup_contains!(html, "unknown product");
    assert_markup_contains!(html, "Total due: 4.50");
    Ok(())
}
