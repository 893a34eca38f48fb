use super::Workspace;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movielog_api::AppState;
use movielog_config::ServerConfig;
use movielog_core::{MemoryStore, MovieCatalog, MovieStore};
use std::sync::Arc;
use tracing::info;

pub async fn run_serve(
    workspace: &Workspace,
    host: Option<String>,
    port: Option<u16>,
    ephemeral: bool,
    output: &Output,
) -> Result<()> {
    let server = with_overrides(&workspace.config.server, host, port);
    if server.port == 0 {
        return Err(eyre!("Port must be between 1 and 65535"));
    }
    let address = server.bind_address();

    let store: Arc<dyn MovieStore> = if ephemeral {
        info!(operation = "store_selected", store = "memory", "Using in-memory sample collection");
        Arc::new(MemoryStore::seeded()?)
    } else {
        let store = workspace.file_store();
        info!(
            operation = "store_selected",
            store = "file",
            path = %store.path().display(),
            "Using movies file"
        );
        Arc::new(store)
    };

    output.info(format!("Serving movie log API on http://{}/api", address));
    movielog_api::serve(&address, AppState::new(MovieCatalog::new(store)))
        .await
        .map_err(|e| eyre!("Server on {} failed: {}", address, e))?;

    output.success("Server stopped");
    Ok(())
}

/// `--host` / `--port` take precedence over `[server]`
fn with_overrides(configured: &ServerConfig, host: Option<String>, port: Option<u16>) -> ServerConfig {
    ServerConfig {
        host: host.unwrap_or_else(|| configured.host.clone()),
        port: port.unwrap_or(configured.port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_configured_address() {
        let configured = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };

        assert_eq!(with_overrides(&configured, None, None).bind_address(), "0.0.0.0:9000");
        assert_eq!(with_overrides(&configured, None, Some(3000)).bind_address(), "0.0.0.0:3000");
        assert_eq!(
            with_overrides(&configured, Some("127.0.0.1".to_string()), Some(8081)).bind_address(),
            "127.0.0.1:8081"
        );
    }
}
