pub mod asset_list;
pub mod home;
pub mod login;
pub mod manage_employees;
pub mod manage_requests;
pub mod my_assets;
pub mod outcome;

pub use asset_list::AssetListPage;
pub use home::{DashboardHome, HomePage};
pub use login::LoginPage;
pub use manage_employees::ManageEmployeesPage;
pub use manage_requests::ManageRequestsPage;
pub use my_assets::MyAssetsPage;
