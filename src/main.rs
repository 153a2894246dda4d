use anyhow::Context;
use polykit::{describe_scene, init_logging, session_from_config, Config};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = match polykit_settings::default_config_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        Err(e) => {
            tracing::warn!("{}, using default settings", e);
            Config::default()
        }
    };

    let mut state = session_from_config(&config);

    if let Some(path) = std::env::args_os().nth(1) {
        if let Err(e) = state.load_from_file(&path) {
            let action = if e.is_io_error() { "read" } else { "parse" };
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to {action} {}", path.to_string_lossy())));
        }
        for line in describe_scene(state.scene()) {
            println!("{line}");
        }
    } else {
        tracing::info!("polykit {} ready, no scene given", polykit::VERSION);
    }

    Ok(())
}
