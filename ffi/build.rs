use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    let result = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("REQPREP_H")
        .with_cpp_compat(true)
        .generate();

    // Generated into OUT_DIR; the path is exported to the crate as REQPREP_HEADER.
    let header = out_dir.join("reqprep.h");
    match result {
        Ok(bindings) => {
            bindings.write_to_file(&header);
            println!("cargo:rustc-env=REQPREP_HEADER={}", header.display());
        }
        Err(e) => println!("cargo:warning=cbindgen could not generate reqprep.h: {e}"),
    }
}
