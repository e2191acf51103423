//! application entry point

use crate::server::model::config::ServerConfig;
use derive_more::Display;
use log::{info, warn};
use std::env;
use std::path::Path;
use std::str::FromStr;

mod server;

const DEV_DOTENV_PATH: &str = ".env.dev";

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv = match env {
        Env::Prod | Env::Stg => Ok(()), // load in CI
        Env::Dev => dotenvy::from_path(Path::new(DEV_DOTENV_PATH)),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv {
        warn!("failed to load {}, using process env only, {}", DEV_DOTENV_PATH, e);
    }

    // c. run app
    let config = ServerConfig::from_env()?;

    info!("App is starting in env={}", env);

    server::run(config).await?;
    Ok(())
}

#[derive(Debug, Display, PartialEq)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
