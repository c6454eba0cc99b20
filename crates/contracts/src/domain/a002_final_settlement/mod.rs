pub mod aggregate;
pub mod seed;

pub use aggregate::{
    FinalSettlement, PaymentMode, SettlementBreakdown, SettlementStatus, KEY_PAYMENT_MODE,
};
