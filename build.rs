use std::process::Command;

/// Backend settings read through `option_env!` at compile time.
const BAKED_ENV: [&str; 2] = ["CEOE_SUPABASE_URL", "CEOE_SUPABASE_ANON_KEY"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets");
    for key in BAKED_ENV {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let tag = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty());
    if let Some(tag) = tag {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}
