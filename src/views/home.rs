use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{bs_icons::BsShieldLock, fa_brands_icons::FaGithub, fa_solid_icons::FaDownload},
    Icon,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col",
            // Hero section
            div { class: "container mx-auto px-4 py-20 flex flex-col items-center text-center",
                div { class: "mb-8 text-blue-400",
                    Icon { icon: BsShieldLock, width: 96, height: 96 }
                }
                h1 { class: "text-5xl font-bold mb-6 text-white", "JavaScript File Obfuscator" }
                p { class: "text-xl text-gray-400 mb-8 max-w-2xl",
                    "Pick a folder of scripts, send them off for obfuscation, and get a ready-to-ship archive back. No accounts, no setup."
                }
                div { class: "flex gap-4 justify-center",
                    Link {
                        to: "/obfuscate",
                        class: "inline-flex items-center justify-center bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 transition-colors",
                        Icon {
                            icon: FaDownload,
                            width: 16,
                            height: 16,
                            class: "mr-2",
                        }
                        "Start Obfuscating"
                    }
                    a {
                        href: "https://github.com/yourusername/script-obfuscator",
                        target: "_blank",
                        class: "inline-flex items-center justify-center bg-gray-800 text-white px-6 py-3 rounded-lg hover:bg-gray-700 border border-gray-700 transition-colors",
                        Icon {
                            icon: FaGithub,
                            width: 16,
                            height: 16,
                            class: "mr-2",
                        }
                        "View on GitHub"
                    }
                }
            }

            // How it works section
            div { class: "bg-gray-800 border-t border-b border-gray-700 py-16",
                div { class: "container mx-auto px-4",
                    h2 { class: "text-3xl font-bold text-center mb-12 text-white", "How It Works" }
                    div { class: "grid grid-cols-3 gap-8 max-w-3xl mx-auto",
                        // Step 1
                        div { class: "text-center",
                            div { class: "w-12 h-12 rounded-full bg-blue-600 flex items-center justify-center mx-auto mb-4",
                                span { class: "text-white text-xl font-bold", "1" }
                            }
                            h3 { class: "text-lg font-semibold mb-2 text-white", "Pick a Folder" }
                            p { class: "text-gray-400 text-sm",
                                "Select a project folder. Only .js and .jsx files are picked up; everything else is left alone."
                            }
                        }
                        // Step 2
                        div { class: "text-center",
                            div { class: "w-12 h-12 rounded-full bg-blue-600 flex items-center justify-center mx-auto mb-4",
                                span { class: "text-white text-xl font-bold", "2" }
                            }
                            h3 { class: "text-lg font-semibold mb-2 text-white", "Obfuscate" }
                            p { class: "text-gray-400 text-sm",
                                "One click ships the scripts to the obfuscation service and waits for the transformed archive."
                            }
                        }
                        // Step 3
                        div { class: "text-center",
                            div { class: "w-12 h-12 rounded-full bg-blue-600 flex items-center justify-center mx-auto mb-4",
                                span { class: "text-white text-xl font-bold", "3" }
                            }
                            h3 { class: "text-lg font-semibold mb-2 text-white", "Download" }
                            p { class: "text-gray-400 text-sm",
                                "Save the finished zip wherever you need it and drop the obfuscated files into your build."
                            }
                        }
                    }
                }
            }

            // CTA section
            div { class: "container mx-auto px-4 py-16 text-center",
                h2 { class: "text-3xl font-bold mb-6 text-white", "Ready to protect your scripts?" }
                p { class: "text-xl text-gray-400 mb-8 max-w-2xl mx-auto",
                    "Your sources never leave memory until you choose where the archive lands."
                }
                Link {
                    to: "/obfuscate",
                    class: "inline-flex items-center justify-center bg-blue-600 text-white px-8 py-4 rounded-lg hover:bg-blue-700 transition-colors text-lg",
                    "Get Started Now"
                }
            }
        }
    }
}
