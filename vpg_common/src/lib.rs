mod rupees;

pub mod helpers;
pub mod op;
mod secret;

pub use rupees::{MoneyConversionError, Rupees, INR_CURRENCY_CODE, INR_CURRENCY_CODE_LOWER};
pub use secret::Secret;
