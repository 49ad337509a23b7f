use anyhow::Context;
use swapi_codec::{CodecConfig, RecordCodec, ORIGINAL_CHARACTER_DATA};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// decode -> re-encode -> re-decode -> compare, once per codec preset.
// Any failed check aborts with its own message; one success line when all pass.
fn main() -> Result<(), anyhow::Error> {
    // RUST_LOG=debug shows key mapping and encode sizes; default is info.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    for (label, config) in [
        ("table", CodecConfig::table()),
        ("snake_case", CodecConfig::snake_case()),
    ] {
        let codec = RecordCodec::new(config);
        let character = codec.round_trip(ORIGINAL_CHARACTER_DATA).map_err(|e| {
            error!(preset = label, "💥 {}", e);
            e
        });
        let character = character.with_context(|| format!("{} preset failed", label))?;
        info!(preset = label, name = character.name(), "character survived the round trip");
    }

    println!("🎉🎉🎉 Success! Everything decoded and re-encoded successfully! 🎉🎉🎉");
    Ok(())
}
