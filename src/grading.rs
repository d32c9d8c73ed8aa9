pub mod adjust;
pub mod pipeline;
pub mod white_balance;
