use billpress_types::Ident;
use thiserror::Error;

/// Errors raised while reconstructing or enriching an invoice.
#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("Invoice '{0}' not found in the data source")]
    InvoiceNotFound(Ident),

    #[error("Invalid quantity '{value}' for product '{product}'")]
    InvalidQuantity { product: String, value: String },
}
