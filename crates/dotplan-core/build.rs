// File: crates/dotplan-core/build.rs
// Summary: Build script to link required Windows system libraries for Skia's PDF/font backends.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc. (font manager lookups)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
