use std::sync::Arc;

use dioxus::prelude::dioxus_elements::FileEngine;
use dioxus::prelude::*;
use futures::future::join_all;

use crate::server::obfuscate::obfuscate_folder;
use crate::views::obfuscate::types::{
    partition_script_names, ObfuscationResult, ScriptFile, OUTPUT_FILE_NAME,
};

// Platform-split clock; the web build has no std::time::Instant
#[cfg(feature = "web")]
mod timing {
    use js_sys::Date;

    pub struct ElapsedTimer {
        started: f64,
    }

    impl ElapsedTimer {
        pub fn start() -> Self {
            Self {
                started: Date::now(),
            }
        }

        pub fn secs_f32(&self) -> f32 {
            ((Date::now() - self.started) / 1000.0) as f32
        }
    }
}

#[cfg(not(feature = "web"))]
mod timing {
    use std::time::Instant;

    pub struct ElapsedTimer {
        started: Instant,
    }

    impl ElapsedTimer {
        pub fn start() -> Self {
            Self {
                started: Instant::now(),
            }
        }

        pub fn secs_f32(&self) -> f32 {
            self.started.elapsed().as_secs_f32()
        }
    }
}

use timing::ElapsedTimer;

/// Pull the picked files out of the browser's file engine, keeping only
/// recognized script files. Returns the retained set plus how many entries
/// were dropped by the extension filter.
pub async fn read_script_files(engine: Arc<dyn FileEngine>) -> (Vec<ScriptFile>, usize) {
    let (names, skipped) = partition_script_names(engine.files());

    let reads = names.into_iter().map(|name| {
        let engine = engine.clone();
        async move {
            match engine.read_file(&name).await {
                Some(contents) => Some(ScriptFile { name, contents }),
                None => {
                    tracing::warn!("Could not read {} from the selection", name);
                    None
                }
            }
        }
    });

    let files = join_all(reads).await.into_iter().flatten().collect();
    (files, skipped)
}

/// Ship the selection to the obfuscation service and settle the UI signals
/// with the outcome.
pub fn execute_obfuscation(
    files: Vec<ScriptFile>,
    processing: &Signal<bool>,
    error: &Signal<Option<String>>,
    status: &Signal<Option<String>>,
    result: &Signal<Option<ObfuscationResult>>,
) {
    spawn({
        let mut processing = processing.clone();
        let mut error = error.clone();
        let mut status = status.clone();
        let mut result = result.clone();

        async move {
            let count = files.len();
            let total_bytes: usize = files.iter().map(|f| f.contents.len()).sum();
            tracing::info!(
                "Submitting {} script files ({} bytes) for obfuscation",
                count,
                total_bytes
            );

            let timer = ElapsedTimer::start();
            match obfuscate_folder(files).await {
                Ok(archive) if archive.is_empty() => {
                    tracing::error!("Obfuscation service returned an empty archive");
                    error.set(Some("Failed to obfuscate files. Please try again.".into()));
                }
                Ok(archive) => {
                    status.set(Some(format!(
                        "Obfuscated {} files in {:.1}s",
                        count,
                        timer.secs_f32()
                    )));
                    result.set(Some(ObfuscationResult {
                        data: archive,
                        file_name: OUTPUT_FILE_NAME.to_string(),
                    }));
                }
                Err(e) => {
                    tracing::error!("Error during obfuscation: {}", e);
                    error.set(Some("Failed to obfuscate files. Please try again.".into()));
                }
            }

            processing.set(false);
        }
    });
}
