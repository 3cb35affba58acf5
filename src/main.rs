use anyhow::Result;
use export_icons::{generate_all, GeneratorConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = GeneratorConfig::default();
    let written = generate_all(&config)?;

    println!();
    println!("✓ Icons generated successfully!");
    println!("Files created:");
    for path in &written {
        println!("  - {}", path.display());
    }
    println!();
    println!("Reload your Chrome extension to see the new icons.");

    Ok(())
}
