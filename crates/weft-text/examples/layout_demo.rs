/// Lay out mixed-direction text with real fonts and print the lines.
///
/// Run with: cargo run -p weft-text --example layout_demo -- path/to/font.ttf [more fonts...]
///
/// Settings come from weft.toml and WEFT_* environment variables.
use weft_text::{FontFace, LayoutEngine};

fn main() {
    env_logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: layout_demo <font file>...");
        std::process::exit(2);
    }

    let engine = LayoutEngine::harfrust();
    for path in &paths {
        let data = std::fs::read(path).expect("Failed to read font file");
        let face = FontFace::from_vec(data, 0).expect("Failed to parse font");
        let descriptor = face.descriptor();
        let id = engine.load_face(face);
        println!(
            "Loaded {path} as {id:?}: {} {:?} {}",
            descriptor.typeface, descriptor.style, descriptor.weight.0
        );
    }

    let config = weft_config::WeftConfig::load();
    let options = engine.configure(&config);

    let text = "The quick سماء שלום لا fox تمط שלום\nغير the lazy dog.";
    let doc = engine.layout_with(&options, text).expect("Layout failed");

    println!("\n=== Layout ===");
    println!("Text: {text:?}");
    println!("Align width: {:.1}", doc.align_width());
    println!("Lines: {}\n", doc.lines().len());

    for (i, line) in doc.lines().iter().enumerate() {
        let x = line.align_offset(options.params.alignment, doc.align_width());
        println!(
            "line {i}: baseline {:.1}, x {:.1}, width {:.1}, {} runes{}",
            line.y_offset,
            x,
            line.width,
            line.rune_count,
            if line.has_newline() { ", ends with newline" } else { "" }
        );
        let positions = line.run_positions();
        for &index in &line.visual_order {
            let run = &line.runs[index];
            println!(
                "  run {index} at x {:.1}: {:?}, runes {}..{}, {} glyphs, face {:?}",
                x + positions[index],
                run.direction,
                run.runes.offset,
                run.runes.end(),
                run.glyph_count(),
                run.face
            );
        }
    }
}
