pub mod binding;
pub mod repository_service;

pub use binding::BrowserBinding;
pub use repository_service::BrowserRepositoryService;
