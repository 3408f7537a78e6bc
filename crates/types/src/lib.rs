pub mod amount;
pub mod ident;

pub use amount::format_amount;
pub use ident::Ident;
