fn main() {
    // Stamped into the footer tooltip via env!("BUILD_TIME")
    let built_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");
    println!("cargo:rerun-if-changed=build.rs");
}
