//! Fuzz target: `MonitorConfig::from_json`
//!
//! Feeds arbitrary bytes to the JSON override parser and verifies:
//! - No panics on malformed or hostile input
//! - Anything accepted also passes `validate()`
//! - An accepted config survives a serialise / parse cycle unchanged
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use homewatch::config::MonitorConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = core::str::from_utf8(data) else {
        return;
    };

    let Ok(config) = MonitorConfig::from_json(doc) else {
        return;
    };
    assert!(config.validate().is_ok(), "from_json accepted an invalid config");

    let text = serde_json::to_string(&config).expect("accepted config must serialise");
    let again = MonitorConfig::from_json(&text).expect("serialised config must parse");
    assert_eq!(again, config);
});
