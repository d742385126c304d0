pub mod show;

pub use show::ShowRecord;
