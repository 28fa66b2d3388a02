//! Build script for glimmer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml and compiles it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIOs on the RP2040
const GPIO_COUNT: i64 = 30;

/// Pins the display configuration can hold
const MAX_DISPLAY_PINS: usize = 16;

fn main() {
    setup_linker();
    let settings = validate_config();
    write_constants(&settings);
}

/// Validated contents of display.toml
struct Settings {
    show_delay_ms: i64,
    scroll_delay_ms: i64,
    pins: Vec<i64>,
    scan_step_us: i64,
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() -> Settings {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file.        ║\n\
            ║  Please create one in the glimmer-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let settings = Settings {
        show_delay_ms: positive(&config, "display", "show_delay_ms", &mut errors),
        scroll_delay_ms: positive(&config, "display", "scroll_delay_ms", &mut errors),
        pins: validate_pins(&config, &mut errors),
        scan_step_us: positive(&config, "matrix", "scan_step_us", &mut errors),
    };

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
    settings
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a required positive integer from `[section]`
fn positive(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(v)) if *v > 0 && *v <= u32::MAX as i64 => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be a positive 32-bit value", section, key));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Validate the shared display pins
fn validate_pins(config: &toml::Value, errors: &mut Vec<String>) -> Vec<i64> {
    let pins = match config.get("display").and_then(|d| d.get("pins")) {
        Some(toml::Value::Array(pins)) => pins,
        Some(_) => {
            errors.push("[display] pins must be an array".to_string());
            return Vec::new();
        }
        None => {
            errors.push("[display] missing 'pins'".to_string());
            return Vec::new();
        }
    };

    if pins.len() > MAX_DISPLAY_PINS {
        errors.push(format!("[display] at most {} pins allowed", MAX_DISPLAY_PINS));
    }

    let mut seen = Vec::new();
    for (i, pin) in pins.iter().enumerate() {
        match pin {
            toml::Value::Integer(p) if (0..GPIO_COUNT).contains(p) => {
                if seen.contains(p) {
                    errors.push(format!("[display] pin {} listed twice", p));
                }
                seen.push(*p);
            }
            _ => errors.push(format!(
                "[display] pins[{}] must be a GPIO number 0-{}",
                i,
                GPIO_COUNT - 1
            )),
        }
    }
    seen
}

/// Emit the validated settings as Rust constants
fn write_constants(settings: &Settings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let pins = settings
        .pins
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut f = File::create(out_dir.join("display_config.rs")).unwrap();
    writeln!(f, "pub const SHOW_DELAY_MS: u32 = {};", settings.show_delay_ms).unwrap();
    writeln!(f, "pub const SCROLL_DELAY_MS: u32 = {};", settings.scroll_delay_ms).unwrap();
    writeln!(f, "pub const DISPLAY_PINS: &[u8] = &[{}];", pins).unwrap();
    writeln!(f, "pub const SCAN_STEP_US: u64 = {};", settings.scan_step_us).unwrap();
}
