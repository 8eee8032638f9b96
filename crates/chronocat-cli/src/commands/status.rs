use chrono::Utc;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::load_facade()?;

    // Observe a session that finished since the last command.
    if let Some(event) = facade.complete(Utc::now())? {
        super::record_completion(&facade, &event)?;
        println!("{}", serde_json::to_string_pretty(&event)?);
    }

    let snapshot = facade.snapshot(Utc::now());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
