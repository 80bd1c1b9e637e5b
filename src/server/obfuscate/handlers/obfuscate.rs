use dioxus::prelude::*;
use tracing;

use crate::views::obfuscate::types::ScriptFile;

/// Forward the selected scripts to the external obfuscation service and
/// return the zip archive it produces.
#[server(ObfuscateFolder)]
pub async fn obfuscate_folder(files: Vec<ScriptFile>) -> Result<Vec<u8>, ServerFnError> {
    if files.is_empty() {
        return Err(ServerFnError::ServerError(
            "No script files in the selection.".to_string(),
        ));
    }

    #[cfg(feature = "server")]
    {
        use crate::server::obfuscate::{config, services};

        let endpoint = config::obfuscator_endpoint();
        tracing::info!(
            "Forwarding {} script files to {}",
            files.len(),
            endpoint
        );

        let archive = services::forward_to_obfuscator(&endpoint, files)
            .await
            .map_err(ServerFnError::<dioxus::prelude::server_fn::error::NoCustomError>::ServerError)?;

        tracing::info!(
            "Received {} byte archive from the obfuscation service",
            archive.len()
        );
        Ok(archive)
    }

    #[cfg(not(feature = "server"))]
    Err(ServerFnError::ServerError(
        "Server feature not enabled".to_string(),
    ))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_selection_is_rejected_without_a_request() {
        let err = obfuscate_folder(Vec::new()).await.unwrap_err();
        assert!(err.to_string().contains("No script files"));
    }
}
