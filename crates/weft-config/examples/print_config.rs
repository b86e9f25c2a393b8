/// Example program to print the loaded configuration
///
/// Run with: cargo run -p weft-config --example print_config

fn main() {
    // Load configuration from weft.toml and WEFT_* variables
    let config = weft_config::WeftConfig::load();

    println!("=== Weft Configuration ===\n");

    println!("Text Settings:");
    println!("  Typeface: {:?}", config.text.typeface);
    println!("  Style: {:?}", config.text.style);
    println!("  Weight: {}", config.text.weight);
    println!("  Size: {} px/em", config.text.px_per_em);
    println!("  Line Height: {:?} x {}", config.text.line_height, config.text.line_height_scale);
    println!("  Width: {}..{}", config.text.min_width, config.text.max_width);
    println!("  Direction: {:?}", config.text.direction);
    println!("  Language: {}", config.text.language);
    println!("  Wrap: {:?}", config.text.wrap);
    println!("  Alignment: {:?}", config.text.alignment);
    println!();

    println!("Font Settings:");
    println!("  Fallback: {:?}", config.fonts.fallback);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
