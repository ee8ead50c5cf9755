// File: crates/graph-core/build.rs
// Summary: Links the Windows system libraries the Skia raster backend (and ICU for text layout) needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
