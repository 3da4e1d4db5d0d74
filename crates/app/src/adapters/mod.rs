pub mod persistence;
pub mod reference;
pub mod storage;
