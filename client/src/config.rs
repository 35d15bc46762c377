use anchor_sync::{SyncConfig, TargetId, constants::RESOLVE_RETRY_COOLDOWN};
use bevy::prelude::*;

use crate::server::ServerConfig;

/// Environment variable holding the admin credential when no CLI flag is given.
pub const ADMIN_TOKEN_ENV: &str = "ANCHOR_ADMIN_TOKEN";
/// Environment variable naming the server when no `--server` flag is given.
pub const SERVER_URI_ENV: &str = "ANCHOR_SERVER_URI";

/// Launch options of the viewer.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct ViewerConfig {
    /// Credential used by the sign-in action. Its presence is what makes this participant an
    /// admin candidate; the token itself is never logged.
    pub admin_token: Option<String>,
    /// Overrides the registered marker image id.
    pub marker: Option<String>,
    /// Shared store to join. `None` keeps the store in-process.
    pub server: Option<ServerConfig>,
}

/// Flags as given, before they are folded into a [`ViewerConfig`].
#[derive(Default)]
struct Args {
    admin_token: Option<String>,
    marker: Option<String>,
    uri: Option<String>,
    module: Option<String>,
    token: Option<String>,
    grant_admin: Option<String>,
}

impl ViewerConfig {
    /// Reads CLI args, then falls back to the environment.
    ///
    /// Supported:
    ///   --admin-token <TOKEN>, --admin-token=<TOKEN>
    ///   --admin-token-file <path>, --admin-token-file=<path>
    ///   --marker <id>, --marker=<id>
    ///   --server <uri>, --server=<uri>
    ///   --module <name>, --module=<name>
    ///   --token <JWT>, -t <JWT>, --token=<JWT>
    ///   --token-file <path>, --token-file=<path>
    ///   --grant-admin <identity hex>, --grant-admin=<identity hex>
    ///   ANCHOR_ADMIN_TOKEN, ANCHOR_SERVER_URI, and STDB_TOKEN or STDB_JWT environment variables
    pub fn from_cli_env() -> Self {
        let mut args = parse_args(std::env::args().skip(1));
        args.admin_token = args.admin_token.or_else(|| env_var(ADMIN_TOKEN_ENV));
        args.uri = args.uri.or_else(|| env_var(SERVER_URI_ENV));
        args.token = args
            .token
            .or_else(|| env_var("STDB_TOKEN"))
            .or_else(|| env_var("STDB_JWT"));
        args.into_config()
    }

    pub fn sync_config(&self) -> SyncConfig {
        // Every tracked frame is a resolve trigger.
        let mut sync = SyncConfig {
            retry_cooldown: RESOLVE_RETRY_COOLDOWN,
            ..SyncConfig::default()
        };
        if let Some(marker) = &self.marker {
            sync.marker.id = TargetId::from(marker.as_str());
        }
        sync
    }
}

impl Args {
    fn into_config(self) -> ViewerConfig {
        let server = self.uri.map(|uri| {
            let mut server = ServerConfig::new(uri);
            if let Some(module) = self.module {
                server.module = module;
            }
            server.token = self.token;
            server.grant_admin = self.grant_admin;
            server
        });
        ViewerConfig {
            admin_token: self.admin_token,
            marker: self.marker,
            server,
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn read_token_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents.trim().to_string()).filter(|t| !t.is_empty()),
        Err(err) => {
            warn!("Could not read token file {path}: {err}");
            None
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    let mut pending_key: Option<&'static str> = None;

    for arg in args {
        if let Some(key) = pending_key.take() {
            match key {
                "admin-token" => parsed.admin_token = Some(arg),
                "admin-token-file" => parsed.admin_token = read_token_file(&arg),
                "server" => parsed.uri = Some(arg),
                "module" => parsed.module = Some(arg),
                "token" => parsed.token = Some(arg),
                "token-file" => parsed.token = read_token_file(&arg),
                "grant-admin" => parsed.grant_admin = Some(arg),
                _ => parsed.marker = Some(arg),
            }
            continue;
        }

        if let Some((flag, value)) = arg.split_once('=') {
            match flag {
                "--admin-token" => parsed.admin_token = Some(value.to_string()),
                "--admin-token-file" => parsed.admin_token = read_token_file(value),
                "--marker" => parsed.marker = Some(value.to_string()),
                "--server" => parsed.uri = Some(value.to_string()),
                "--module" => parsed.module = Some(value.to_string()),
                "--token" => parsed.token = Some(value.to_string()),
                "--token-file" => parsed.token = read_token_file(value),
                "--grant-admin" => parsed.grant_admin = Some(value.to_string()),
                _ => {}
            }
            continue;
        }

        pending_key = match arg.as_str() {
            "--admin-token" => Some("admin-token"),
            "--admin-token-file" => Some("admin-token-file"),
            "--marker" => Some("marker"),
            "--server" => Some("server"),
            "--module" => Some("module"),
            "--token" | "-t" => Some("token"),
            "--token-file" => Some("token-file"),
            "--grant-admin" => Some("grant-admin"),
            _ => None,
        };
    }
    parsed
}
