pub mod describe;
pub mod report;
