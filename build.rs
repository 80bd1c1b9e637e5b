use std::path::Path;

fn main() {
    // Re-run when the stylesheet bundle changes
    println!("cargo:rerun-if-changed=assets/");

    // assets/tailwind.css is a checked-in tailwind build; flag it early if
    // it went missing instead of failing inside the asset! macro.
    let tailwind = Path::new("assets/tailwind.css");
    if !tailwind.exists() {
        println!(
            "cargo:warning=assets/tailwind.css not found; run `npx tailwindcss -i input.css -o assets/tailwind.css`"
        );
    }
}
