pub mod csv_file;

pub use csv_file::{read_mapping, read_mapping_file};
