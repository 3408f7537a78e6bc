//! Fixture writers for integration tests.
//!
//! The standard dataset is small enough to reason about by hand: invoice 1
//! totals 25.00 (2 x 10.00 + 1 x 5.00), invoice 2 totals 12.50.

use std::fs;
use std::io;
use std::path::Path;

/// A complete template carrying every supported placeholder.
pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Invoice {{invoice_id}}</title>
</head>
<body>
    <h1>Invoice #{{invoice_id}}</h1>
    <p>Date: {{invoice_date}}</p>
    <div class="customer">
        <p><strong>{{customer_name}}</strong></p>
        <p>Email: {{customer_email}}</p>
        <p>Phone: {{customer_phone}}</p>
        <p>Address: {{customer_address}}</p>
    </div>
    {{tables}}
    <div class="total-section">
        <p>Total due: {{total_amount}}</p>
    </div>
</body>
</html>
"#;

pub fn write_template(dir: &Path) -> io::Result<()> {
    fs::write(dir.join("invoice.html"), TEMPLATE)
}

pub fn write_flat_invoices(dir: &Path) -> io::Result<()> {
    fs::write(
        dir.join("invoices.csv"),
        "invoice_id,customer_id,date,product_id,quantity\n\
         1,1,2024-03-15,101,2\n\
         1,1,2024-03-15,102,1\n\
         2,2,2024-04-01,103,5\n",
    )
}

pub fn write_customers(dir: &Path) -> io::Result<()> {
    fs::write(
        dir.join("customer.csv"),
        "customer_id,name,email,phone,address\n\
         1,Acme Corp,billing@acme.example,+1 555 0100,1 Industrial Way\n\
         2,Globex Ltd,accounts@globex.example,+1 555 0200,42 Orbit Road\n",
    )
}

pub fn write_products(dir: &Path) -> io::Result<()> {
    fs::write(
        dir.join("product.csv"),
        "product_id,name,price\n\
         101,Widget,10.00\n\
         102,Gadget,5.00\n\
         103,Sprocket,2.50\n",
    )
}

/// Flat CSV invoices plus both reference tables plus the template.
pub fn write_standard_dataset(dir: &Path) -> io::Result<()> {
    write_flat_invoices(dir)?;
    write_customers(dir)?;
    write_products(dir)?;
    write_template(dir)
}

/// Nested JSON invoices over the same reference tables. Invoice 10 totals
/// 35.00 (3 x 10.00 + 1 x 5.00, the second item with no quantity field).
pub fn write_nested_invoices(dir: &Path) -> io::Result<()> {
    fs::write(
        dir.join("orders.json"),
        r#"[
    {
        "invoice_id": 10,
        "customer_id": 1,
        "date": "2024-05-20",
        "items": [
            { "product_id": 101, "quantity": 3 },
            { "product_id": 102 }
        ]
    },
    {
        "invoice_id": 11,
        "customer_id": 2,
        "date": "2024-05-21",
        "items": []
    }
]
"#,
    )
}

/// One invoice with `item_count` resolvable line items of 1.00 each, for
/// pagination tests.
pub fn write_bulk_dataset(dir: &Path, item_count: usize) -> io::Result<()> {
    let mut invoices = String::from("invoice_id,customer_id,date,product_id,quantity\n");
    let mut products = String::from("product_id,name,price\n");
    for i in 1..=item_count {
        invoices.push_str(&format!("1,1,2024-06-01,{},1\n", 100 + i));
        products.push_str(&format!("{},Item {},1.00\n", 100 + i, i));
    }
    fs::write(dir.join("invoices.csv"), invoices)?;
    fs::write(dir.join("product.csv"), products)?;
    write_customers(dir)?;
    write_template(dir)
}
