use serde::{Deserialize, Serialize};

/// File suffixes the obfuscation service accepts.
pub const SCRIPT_EXTENSIONS: [&str; 2] = [".js", ".jsx"];

/// Every successful run downloads under this name, whatever was uploaded.
pub const OUTPUT_FILE_NAME: &str = "obfuscated_scripts.zip";

/// One user-selected script: name plus raw contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptFile {
    pub name: String,
    pub contents: Vec<u8>,
}

/// The archive a successful run produced, held in memory until the user
/// triggers the download.
#[derive(Clone, Debug, PartialEq)]
pub struct ObfuscationResult {
    pub data: Vec<u8>,
    pub file_name: String,
}

/// Suffix match is case-sensitive: `Main.JS` does not qualify.
pub fn is_script_file(name: &str) -> bool {
    SCRIPT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Split candidate names into the retained script names (original order)
/// and the count of everything that was dropped.
pub fn partition_script_names(names: Vec<String>) -> (Vec<String>, usize) {
    let mut kept = Vec::new();
    let mut skipped = 0;
    for name in names {
        if is_script_file(&name) {
            kept.push(name);
        } else {
            skipped += 1;
        }
    }
    (kept, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_script_suffixes() {
        assert!(is_script_file("index.js"));
        assert!(is_script_file("components/App.jsx"));
        assert!(!is_script_file("styles.css"));
        assert!(!is_script_file("package.json"));
        assert!(!is_script_file("readme.md"));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(!is_script_file("Main.JS"));
        assert!(!is_script_file("widget.Jsx"));
    }

    #[test]
    fn partition_keeps_only_scripts_in_order() {
        let names = vec![
            "src/a.js".to_string(),
            "src/styles.css".to_string(),
            "src/b.jsx".to_string(),
            "assets/logo.png".to_string(),
            "src/c.js".to_string(),
        ];
        let (kept, skipped) = partition_script_names(names);
        assert_eq!(kept, vec!["src/a.js", "src/b.jsx", "src/c.js"]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn partition_of_empty_selection_is_empty() {
        let (kept, skipped) = partition_script_names(Vec::new());
        assert!(kept.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn output_name_is_fixed() {
        assert_eq!(OUTPUT_FILE_NAME, "obfuscated_scripts.zip");
    }
}
