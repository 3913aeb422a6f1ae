use std::collections::HashMap;
use std::env;
use std::io::{self, Write};
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=../cross/esp32c3");
    println!("cargo:rerun-if-changed=../bootinfo");

    if env::var("CARGO_FEATURE_ESP32C3").is_ok() {
        // cross/esp32c3

        /* Run the inner Cargo without any Cargo-related environment variables
         * from this outer Cargo.
         */
        let filtered_env: HashMap<String, String> = env::vars()
            .filter(|(k, _)| !k.starts_with("CARGO"))
            .collect();
        let child = Command::new("cargo")
            .arg("build")
            .arg("-vv")
            .arg("--bins")
            .arg("--target")
            .arg("riscv32imc-unknown-none-elf")
            .current_dir("../cross/esp32c3")
            .env_clear()
            .envs(&filtered_env)
            .output()
            .expect("failed to cross-compile for RISC-V");
        io::stdout().write_all(&child.stderr).unwrap();
        io::stdout().write_all(&child.stdout).unwrap();
        assert!(child.status.success());
    }
}
