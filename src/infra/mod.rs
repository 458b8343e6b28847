pub mod factory;
pub mod ids;
pub mod storage;
