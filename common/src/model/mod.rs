pub mod fields;
pub mod package;
pub mod report;
pub mod response;
