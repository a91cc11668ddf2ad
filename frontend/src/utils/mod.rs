pub mod navigation;
pub mod storage;
pub mod token;
