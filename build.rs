fn main() {
    println!("cargo:rerun-if-env-changed=HOMEWATCH_CONFIG");

    // ESP-IDF link arguments are only needed for firmware builds; host
    // builds (tests, simulation) have nothing to emit.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
