// The folder-to-archive obfuscation flow
mod handlers;
mod platforms;
pub mod types;
mod ui;

// Re-export the main component
pub use ui::Obfuscate;
