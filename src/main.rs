use resultant::config::Config;
use resultant::{try_catch, values, Bridge, Failure, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Resultant demo");

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    info!("Configuration loaded: {}", serde_json::to_string(&config)?);

    demo_combinators()?;
    demo_bridge(Bridge::new(config.bridge))?;

    info!("Resultant demo finished");
    Ok(())
}

fn parse_count(raw: &str) -> Result<u16, String> {
    raw.parse::<u16>()
        .map_err(|e| format!("invalid count {:?}: {}", raw, e))
        .into()
}

fn demo_combinators() -> anyhow::Result<()> {
    info!("=== Combinator Demo ===");

    let count = parse_count("12");
    info!("Parsed count: {}", count);

    let combined = count
        .combine_with(Result::okay("widgets"))
        .combine_with_fn(|| Result::okay(true));
    info!("Combined: {}", combined);

    let summary = combined.map(|(count, label, enabled)| {
        format!("{} {} ({})", count, label, if enabled { "enabled" } else { "disabled" })
    });
    info!("Summary: {}", summary);

    let broken = parse_count("70000").or_else_with(|| Result::<u16, Failure>::error(Failure::new()));
    info!("Recovered count: {}", broken);

    let counts: Vec<u16> = values(["1", "x", "3"].into_iter().map(parse_count)).collect();
    info!("Valid counts: {:?}", counts);

    let summary: std::result::Result<String, String> = summary.into();
    info!("Final summary: {}", summary.map_err(|e| anyhow::anyhow!(e))?);

    Ok(())
}

fn demo_bridge(bridge: Bridge) -> anyhow::Result<()> {
    info!("=== Bridge Demo ===");

    let answer = bridge.try_function(|| 6 * 7);
    info!("Bridged function: {}", answer);

    let divided = try_catch(answer, |n| {
        let zero = n - 42;
        n / zero
    });
    info!("Bridged division: {}", divided);

    let value = divided.value_or(0);
    info!("Value after recovery: {}", value);

    Ok(())
}
