pub mod summary;
pub mod table;

pub use summary::SummarySection;
pub use table::EmployeeTable;
