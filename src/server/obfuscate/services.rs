use reqwest::multipart::{Form, Part};

use crate::views::obfuscate::types::ScriptFile;

/// Shared field identifier: every file lands under the same `files` key,
/// the shape a browser form upload would produce.
const FILE_FIELD: &str = "files";

const SCRIPT_MIME: &str = "text/javascript";

/// POST the selection to the obfuscation service as one multipart request
/// and hand back the raw archive bytes.
///
/// Any transport failure or non-2xx status collapses into a single flat
/// error; nothing is retried. No client-side timeout is imposed, so an
/// unresponsive server keeps the request pending.
pub async fn forward_to_obfuscator(
    endpoint: &str,
    files: Vec<ScriptFile>,
) -> Result<Vec<u8>, String> {
    let mut form = Form::new();
    for file in files {
        let part = Part::bytes(file.contents)
            .file_name(file.name)
            .mime_str(SCRIPT_MIME)
            .map_err(|e| format!("Failed to build multipart body: {}", e))?;
        form = form.part(FILE_FIELD, part);
    }

    let client = reqwest::Client::new();
    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Obfuscation request failed: {}", e);
            format!("Obfuscation request failed: {}", e)
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Obfuscation service returned {}", status);
        return Err(format!("Obfuscation service returned {}", status));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| format!("Failed to read archive from response: {}", e))?;
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_files() -> Vec<ScriptFile> {
        vec![
            ScriptFile {
                name: "app.js".to_string(),
                contents: b"console.log('app');".to_vec(),
            },
            ScriptFile {
                name: "components/Widget.jsx".to_string(),
                contents: b"export const Widget = () => null;".to_vec(),
            },
        ]
    }

    #[tokio::test]
    async fn returns_archive_bytes_on_success() {
        let server = MockServer::start().await;
        let archive = b"PK\x03\x04fake-zip-payload".to_vec();

        Mock::given(method("POST"))
            .and(path("/api/obfuscate-folder"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(archive.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/obfuscate-folder", server.uri());
        let out = forward_to_obfuscator(&endpoint, sample_files())
            .await
            .unwrap();
        assert_eq!(out, archive);
    }

    #[tokio::test]
    async fn non_success_status_is_a_flat_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/obfuscate-folder"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/obfuscate-folder", server.uri());
        let err = forward_to_obfuscator(&endpoint, sample_files())
            .await
            .unwrap_err();
        assert!(err.contains("500"), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_flat_error() {
        // Nothing listens on this port
        let err = forward_to_obfuscator("http://127.0.0.1:9/api/obfuscate-folder", sample_files())
            .await
            .unwrap_err();
        assert!(err.contains("request failed"), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn posts_every_file_under_the_shared_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/obfuscate-folder"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK".to_vec()))
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/obfuscate-folder", server.uri());
        forward_to_obfuscator(&endpoint, sample_files())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(
            content_type.starts_with("multipart/form-data"),
            "unexpected content type: {content_type}"
        );

        let body = String::from_utf8_lossy(&requests[0].body);
        assert_eq!(body.matches("name=\"files\"").count(), 2);
        assert!(body.contains("filename=\"app.js\""));
        assert!(body.contains("filename=\"components/Widget.jsx\""));
        assert!(body.contains("console.log('app');"));
    }
}
