// Build script: stage the static demo site into `dist/` so the page and the
// compiled wasm bundle ship together.
use std::path::Path;
use std::{env, fs};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // The wasm bundle itself is produced by wasm-pack (see src/main.rs);
    // this step only stages the site files.
    let target = env::var("TARGET").unwrap_or_default();
    if target == "wasm32-unknown-unknown" {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        if let Err(err) = fs_extra::dir::copy(static_dir, out_dir, &options) {
            println!("cargo:warning=failed to stage static site: {err}");
        }
    }
}
