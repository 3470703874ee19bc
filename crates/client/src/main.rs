//! Dungeon game client binary.
//!
//! Composition root: loads configuration, sets up file logging, parses the
//! map, and hands the level to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! ```bash
//! DUNGEON_MAP_PATH=maps/level1.map cargo run -p dungeon-client
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, logging};
    use client_frontend_core::FrontendConfig;
    use dungeon_client::{Client, ClientConfig};
    use game_content::MapLoader;
    use game_core::GameError;

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(client_config.session_id.as_deref())?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("Map: {}", client_config.map_path.display());

    // 3. Load the level before touching the terminal so errors stay readable
    let level = match MapLoader::load(&client_config.map_path) {
        Ok(level) => level,
        Err(e) => {
            tracing::error!(
                code = e.error_code(),
                severity = e.severity().as_str(),
                "Failed to load map: {}",
                e
            );
            return Err(e.into());
        }
    };

    // 4. Build Frontend
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config)?;

    // 5. Build and run
    let client = Client::builder().level(level).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    let summary = client.run()?;

    tracing::info!(
        "Client shutdown complete: turns={}, final position={}",
        summary.turns,
        summary.final_position
    );
    Ok(())
}
