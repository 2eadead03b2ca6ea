#![no_main]

use ferry::{Engine, ResourceLimits};
use libfuzzer_sys::fuzz_target;

// Any puzzle that loads must solve or report a limit, never panic
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let limits = ResourceLimits {
            max_visited_states: 10_000,
            max_search_time_ms: 1_000,
            ..ResourceLimits::default()
        };
        let mut engine = Engine::with_limits(limits);

        if let Ok(names) = engine.add_puzzle_code(s, "fuzz_input") {
            for name in names {
                let _ = engine.solve(&name);
            }
        }
    }
});
