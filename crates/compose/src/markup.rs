//! The generated markup for the `{{tables}}` expansion.
//!
//! Literal block shapes and the CSS class vocabulary (`page-break`,
//! `header-repeat`, `table-container`, `text-center`, `text-right`) are
//! what the print stylesheet keys on; renderers rely on them staying
//! stable.

use crate::ComposeOptions;
use billpress_assemble::InvoiceHeader;
use billpress_paginate::Page;
use billpress_resolve::CustomerRecord;
use billpress_types::format_amount;

/// Expands the page sequence into the `{{tables}}` markup: for each page in
/// order, the repeated header block (when the page calls for one) followed
/// by that page's item table.
pub(crate) fn render_tables(
    header: &InvoiceHeader,
    customer: &CustomerRecord,
    pages: &[Page<'_>],
    options: &ComposeOptions,
) -> String {
    let mut out = String::new();
    for page in pages {
        if page.repeats_header() {
            out.push_str(&header_repeat_block(header, customer));
        }
        out.push_str(&item_table_block(page, options));
    }
    out
}

fn header_repeat_block(header: &InvoiceHeader, customer: &CustomerRecord) -> String {
    format!(
        r#"
    <div class="page-break"></div>
    <div class="header-repeat">
        <h2>Invoice #{invoice_id}</h2>
        <div class="header-repeat-info">
            <div class="header-repeat-info-row">
                <div class="header-repeat-info-cell header-repeat-info-label">Date:</div>
                <div class="header-repeat-info-cell">{date}</div>
            </div>
        </div>
        <div class="header-repeat-customer">
            <h3>Customer:</h3>
            <div class="header-repeat-customer-details">
                <p><strong>{name}</strong></p>
                <p>Email: {email}</p>
                <p>Phone: {phone}</p>
                <p>Address: {address}</p>
            </div>
        </div>
    </div>
"#,
        invoice_id = header.invoice_id,
        date = header.date,
        name = customer.name,
        email = customer.email,
        phone = customer.phone,
        address = customer.address,
    )
}

fn item_table_block(page: &Page<'_>, options: &ComposeOptions) -> String {
    let mut rows = String::new();
    for (number, item) in page.rows() {
        rows.push_str(&format!(
            r#"
            <tr>
                <td class="text-center">{number}</td>
                <td>{name}</td>
                <td class="text-center">{quantity}</td>
                <td class="text-right">{unit_price} {currency}</td>
                <td class="text-right">{line_total} {currency}</td>
            </tr>
"#,
            number = number,
            name = item.name,
            quantity = item.quantity,
            unit_price = format_amount(item.unit_price),
            line_total = format_amount(item.line_total),
            currency = options.currency,
        ));
    }

    format!(
        r#"
    <div class="table-container">
        <table>
            <thead>
                <tr>
                    <th style="width: 5%;">#</th>
                    <th style="width: 45%;">Product</th>
                    <th style="width: 10%;" class="text-center">Qty</th>
                    <th style="width: 15%;" class="text-right">Unit price</th>
                    <th style="width: 15%;" class="text-right">Amount</th>
                </tr>
            </thead>
            <tbody>
                {rows}
            </tbody>
        </table>
    </div>
"#,
        rows = rows,
    )
}
