use std::time::{SystemTime, UNIX_EPOCH};

// Stamps each build so the startup log shows which binary is running.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=static");

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=SIGNUP_BUILD_ID={build_id}");
}
