//! Page modules

pub mod docs;
pub mod home;
pub mod manage;

pub use docs::DocsPage;
pub use home::HomePage;
pub use manage::ManagePage;
