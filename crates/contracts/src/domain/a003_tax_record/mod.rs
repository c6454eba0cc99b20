pub mod aggregate;
pub mod seed;

pub use aggregate::{
    TaxDeclaration, TaxRecord, TaxRegime, TaxStatus, KEY_FINANCIAL_YEAR, KEY_REGIME,
};
