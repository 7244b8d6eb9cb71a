//! WebSocket endpoint derivation
//!
//! The hosting page derives its socket endpoint from its own scheme and host:
//! `https` pages speak `wss`, everything else speaks `ws`, and each game
//! lives under a fixed `/ws/<game-name>` path. The same rule applies here to
//! a configured base URL.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid base url: {0}")]
    InvalidBase(#[from] url::ParseError),
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("base url has no host")]
    MissingHost,
}

/// Derive the `{ws|wss}://<host>/ws/<game>` endpoint for a game.
///
/// Accepts `http`, `https`, `ws` and `wss` base URLs; any port on the base is
/// preserved. Path and query on the base are discarded - game sockets always
/// live at the fixed `/ws/<game>` path.
pub fn game_endpoint(base: &str, game: &str) -> Result<Url, EndpointError> {
    let base = Url::parse(base)?;

    let scheme = match base.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
    };
    let host = base.host_str().ok_or(EndpointError::MissingHost)?;

    let mut endpoint = format!("{scheme}://{host}");
    if let Some(port) = base.port() {
        endpoint.push_str(&format!(":{port}"));
    }
    endpoint.push_str("/ws/");
    endpoint.push_str(game);

    Ok(Url::parse(&endpoint)?)
}
