use chronocat_core::TimerMode;

pub fn run(mode: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mode: TimerMode = mode.parse()?;
    let mut facade = super::load_facade()?;
    facade.set_mode(mode)?;
    println!("mode: {mode}");
    Ok(())
}
