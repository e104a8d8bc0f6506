pub mod vesting_record;

pub use vesting_record::*;
