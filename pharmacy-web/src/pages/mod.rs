mod cart;
mod dashboard;
mod home;
mod login;
mod medicines;
mod orders;
mod prescriptions;
mod profile;
mod register;

pub use cart::CartPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use medicines::MedicinesPage;
pub use orders::OrdersPage;
pub use prescriptions::PrescriptionsPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
