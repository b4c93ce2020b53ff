pub mod add_employee;
pub mod attendance;
pub mod directory;

pub use add_employee::AddEmployeePage;
pub use attendance::AttendancePage;
pub use directory::DirectoryPage;
