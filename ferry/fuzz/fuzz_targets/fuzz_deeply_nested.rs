#![no_main]

use ferry::Engine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, bool)| {
    let (depth, use_parens) = input;
    let mut engine = Engine::new();

    let depth = (depth as usize % 100) + 1;

    let mut expr = String::from("Wolf");
    for _ in 0..depth {
        expr = if use_parens {
            format!("({} or Wolf)", expr)
        } else {
            format!("{} and Wolf", expr)
        };
    }

    let code = format!(
        r#"
puzzle fuzz_nested
boat capacity 2
passenger Farmer navigator
passenger Wolf
passenger Goat
Goat dies with {} unless Farmer
start left
goal right
"#,
        expr
    );

    let _ = engine.add_puzzle_code(&code, "fuzz_nested");
});
