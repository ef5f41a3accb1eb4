use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if let Ok(raw_dir) = env::var("CARGO_MANIFEST_DIR") {
        let candidate = PathBuf::from(raw_dir);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=TERMH_GEN_SOURCE_DIR={}",
            canonical.display()
        );
    }
}
