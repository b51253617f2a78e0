pub mod batch;
pub mod images;
