//! Build script for the seedcli recommendation client.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory so a fresh install finds it next to where the client looks
//! for its `.env` file:
//!
//! - Linux: `~/.local/share/seedcli/.env.example`
//! - macOS: `~/Library/Application Support/seedcli/.env.example`
//! - Windows: `%LOCALAPPDATA%/seedcli/.env.example`
//!
//! A missing template only produces a cargo warning. Directory creation and
//! write failures fail the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("seedcli");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        let contents = fs::read_to_string(&template)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
