// Server-side integration with the external obfuscation service
pub mod obfuscate;
