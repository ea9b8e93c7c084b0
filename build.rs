fn main() {
    // UniFFI scaffolding comes from the proc-macros in uniffi_bindings.rs,
    // so there is no UDL file to compile here
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
