use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/bridge.rs");

    let out_dir = PathBuf::from("./generated");
    swift_bridge_build::parse_bridges(vec!["src/bridge.rs"])
        .write_all_concatenated(out_dir, env!("CARGO_PKG_NAME"));
}
