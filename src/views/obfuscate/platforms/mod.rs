// Platform-specific delivery of the finished archive
mod common;
#[cfg(feature = "desktop")]
mod desktop;
#[cfg(feature = "web")]
mod web;

// Export platform-specific functions
#[cfg(not(feature = "web"))]
pub use common::create_archive_url;
#[cfg(not(feature = "web"))]
pub use common::trigger_download;
#[cfg(feature = "desktop")]
pub use desktop::{reveal_in_folder, save_archive};
#[cfg(feature = "web")]
pub use web::deliver_archive;
