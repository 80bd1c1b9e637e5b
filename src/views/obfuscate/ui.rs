use dioxus::html::HasFileData;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{bs_icons::BsFolder, fa_solid_icons::FaDownload},
    Icon,
};

use crate::common::Toaster;
use crate::views::obfuscate::handlers::{execute_obfuscation, read_script_files};
use crate::views::obfuscate::types::{ObfuscationResult, ScriptFile};

#[cfg(feature = "desktop")]
use crate::views::obfuscate::platforms::{reveal_in_folder, save_archive};
#[cfg(not(any(feature = "web", feature = "desktop")))]
use crate::views::obfuscate::platforms::{create_archive_url, trigger_download};
#[cfg(feature = "web")]
use crate::views::obfuscate::platforms::deliver_archive;

#[component]
pub fn Obfuscate() -> Element {
    // Selection and result state
    let mut files = use_signal(Vec::<ScriptFile>::new);
    let mut result = use_signal(|| None::<ObfuscationResult>);

    // UI state
    let mut processing = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut status = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<Toaster>);
    #[cfg(feature = "desktop")]
    let mut saved_path = use_signal(|| None::<String>);

    // Define button text based on platform
    let save_button_text = if cfg!(feature = "desktop") {
        "Save to Downloads"
    } else {
        "Download Obfuscated Files (ZIP)"
    };

    // Handle a new folder selection
    let handle_folder_change = move |evt: FormEvent| {
        spawn(async move {
            // A fresh selection discards everything from the previous run
            result.set(None);
            error.set(None);
            status.set(None);
            notice.set(None);
            #[cfg(feature = "desktop")]
            saved_path.set(None);

            let Some(engine) = evt.files() else { return };
            let (picked, skipped) = read_script_files(engine).await;
            if skipped > 0 {
                notice.set(Some(Toaster::Warning(format!(
                    "{skipped} files without a .js or .jsx extension were skipped"
                ))));
            }
            files.set(picked);
        });
    };

    // Handle the obfuscate button click
    let handle_obfuscate = move |_| {
        if files().is_empty() {
            return;
        }

        processing.set(true);
        error.set(None);
        status.set(Some("Uploading scripts to the obfuscation service...".into()));

        execute_obfuscation(files(), &processing, &error, &status, &result);
    };

    // Define platform-specific download handlers
    #[cfg(feature = "web")]
    let handle_download = move |_| {
        if let Some(res) = result() {
            if !deliver_archive(&res.data, &res.file_name) {
                error.set(Some("Could not start the download in this browser.".into()));
            }
        }
    };

    #[cfg(feature = "desktop")]
    let handle_download = move |_| {
        if let Some(res) = result() {
            match save_archive(&res.data, &res.file_name) {
                Ok(path) => {
                    notice.set(Some(Toaster::Success(format!("Saved to {path}"))));
                    saved_path.set(Some(path));
                }
                Err(e) => error.set(Some(e)),
            }
        }
    };

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    let handle_download = move |_| {
        // Fallback for builds without a delivery surface
        if let Some(res) = result() {
            if let Some(url) = create_archive_url(&res.data) {
                trigger_download(&url, &res.file_name);
            }
        }
    };

    let selected_count = files().len();

    let button_text = if processing() {
        "Processing..."
    } else {
        "Obfuscate All Files"
    };

    // Selected file listing
    let selected_list = if selected_count > 0 {
        rsx! {
            div { class: "bg-gray-700 rounded-lg p-4 max-h-40 overflow-y-auto",
                h3 { class: "text-gray-300 font-semibold mb-2", "Selected files:" }
                for file in files() {
                    div { class: "text-gray-400 text-sm", "{file.name}" }
                }
            }
        }
    } else {
        rsx! {}
    };

    // Non-blocking notice (skipped files, saved archive)
    let notice_toast = if let Some(toast) = notice() {
        rsx! {
            div { class: "mt-4 border p-3 rounded flex items-center justify-between {toast.classes()}",
                p { "{toast.message()}" }
                button {
                    class: "ml-2 font-bold",
                    onclick: move |_| notice.set(None),
                    "✕"
                }
            }
        }
    } else {
        rsx! {}
    };

    // Error message component
    let error_message = if let Some(err) = error() {
        rsx! {
            div { class: "mt-4 bg-red-800 text-white p-3 rounded",
                p { "{err}" }
            }
        }
    } else {
        rsx! {}
    };

    // Status message component
    let status_message = if let Some(stat) = status() {
        rsx! {
            div { class: "mt-4 bg-blue-900 text-white p-3 rounded",
                p { "{stat}" }
            }
        }
    } else {
        rsx! {}
    };

    // Saved-location section (desktop only)
    #[cfg(feature = "desktop")]
    let saved_section = if let Some(path) = saved_path() {
        let reveal = path.clone();
        rsx! {
            div { class: "mt-4 text-sm text-gray-300",
                p { class: "mb-2", "Saved to {path}" }
                button {
                    class: "px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded transition-colors",
                    onclick: move |_| reveal_in_folder(&reveal),
                    "Show in Folder"
                }
            }
        }
    } else {
        rsx! {}
    };

    #[cfg(not(feature = "desktop"))]
    let saved_section = rsx! {};

    // Download section - shown once a result is held
    let result_section = if result().is_some() {
        rsx! {
            div { class: "mt-6 p-6 bg-green-900 rounded-lg border border-green-700",
                p { class: "text-green-400 font-medium mb-4", "✓ Your obfuscated archive is ready!" }
                div { class: "text-center",
                    button {
                        class: "inline-flex items-center justify-center px-6 py-3 bg-green-600 hover:bg-green-700 rounded-lg font-medium text-white transition-colors",
                        onclick: handle_download,
                        Icon {
                            icon: FaDownload,
                            width: 16,
                            height: 16,
                            class: "mr-2",
                        }
                        "{save_button_text}"
                    }
                }
                {saved_section}
            }
        }
    } else {
        rsx! {}
    };

    // Main component UI
    rsx! {
        div { class: "min-h-screen text-white",
            div { class: "container mx-auto px-4 py-8",
                div { class: "text-center mb-10",
                    h1 { class: "text-4xl font-bold text-white", "JavaScript File Obfuscator" }
                    p { class: "text-gray-400 mt-2", "Upload a folder and get back an obfuscated archive" }
                }

                div { class: "max-w-2xl mx-auto bg-gray-800 p-6 rounded-lg shadow-lg",
                    // Folder picker
                    div { class: "border-2 border-dashed border-gray-600 rounded-lg p-8 text-center hover:bg-gray-700 transition-colors",
                        input {
                            r#type: "file",
                            id: "folder-upload",
                            class: "hidden",
                            multiple: true,
                            directory: true,
                            onchange: handle_folder_change,
                        }
                        label {
                            r#for: "folder-upload",
                            class: "cursor-pointer flex flex-col items-center",
                            div { class: "text-gray-400 mb-4",
                                Icon { icon: BsFolder, width: 56, height: 56 }
                            }
                            span { class: "text-lg text-gray-300 mb-2",
                                if selected_count > 0 {
                                    "{selected_count} JavaScript files selected"
                                } else {
                                    "Click to upload a folder"
                                }
                            }
                            span { class: "text-sm text-gray-500",
                                "Only .js and .jsx files will be processed"
                            }
                        }
                    }

                    div { class: "mt-6" }

                    // Selected files
                    {selected_list}

                    // Skipped-file notice
                    {notice_toast}

                    div { class: "mt-6 text-center",
                        button {
                            class: "px-8 py-3 rounded-lg text-white text-lg font-semibold bg-blue-600 hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed w-full",
                            onclick: handle_obfuscate,
                            disabled: selected_count == 0 || processing(),
                            "{button_text}"
                        }
                    }

                    // Error messages
                    {error_message}

                    // Status messages
                    {status_message}

                    // Download section
                    {result_section}
                }
            }
        }
    }
}
