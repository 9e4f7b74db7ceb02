// File: crates/chart-engine/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font/locale lookup goes through the registry APIs
        println!("cargo:rustc-link-lib=advapi32");
    }
}
