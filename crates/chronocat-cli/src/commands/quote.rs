use chrono::Utc;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let facade = super::load_facade()?;
    let quote = facade.quote(Utc::now());
    println!("\"{}\"", quote.quote);
    println!("- {}", quote.author);
    Ok(())
}
