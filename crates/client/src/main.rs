pub mod cli;
pub mod dashboards;
pub mod projections;
pub mod shared;
pub mod system;
pub mod usecases;

use anyhow::Context;
use std::path::PathBuf;

use crate::cli::{parse_args, usage, Command};
use crate::shared::config::{load_config, ConfigOrigin};
use crate::shared::data::{self, Snapshot};
use crate::system::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n\n{}", e, usage());
            std::process::exit(2);
        }
    };
    if cli.command == Command::Help {
        print!("{}", usage());
        return Ok(());
    }

    let (config, origin) = load_config(cli.config.as_deref())?;
    system::tracing::initialize(&config.logging)?;
    match &origin {
        ConfigOrigin::Explicit(path) | ConfigOrigin::NextToExe(path) => {
            tracing::info!("Loading config from: {}", path.display())
        }
        ConfigOrigin::Embedded => tracing::info!("Using default embedded configuration"),
    }

    let source = data::from_config(&config.source)?;
    let snapshot = Snapshot::load(source.as_ref())
        .await
        .with_context(|| format!("Cannot load data from {}", source.describe()))?;
    let session = Session::open(&snapshot.users, &config.session.username)?;

    match cli.command {
        Command::Projects { filter } => {
            let cards = dashboards::d400_project_cards::service::build_cards(&snapshot, &session, &filter);
            tracing::info!("{} project(s) for filter '{}'", cards.len(), filter);
            print!("{}", dashboards::d400_project_cards::service::render(&cards));
        }
        Command::Matrix { project } => {
            let review = usecases::u501_matrix_review::service::review_project(
                source.as_ref(),
                &snapshot,
                &session,
                &project,
            )
            .await?;
            print!("{}", usecases::u501_matrix_review::service::render(&review));
        }
        Command::Users { filter } => {
            let users = dashboards::d401_user_directory::service::list_users(&snapshot.users, &filter);
            print!("{}", dashboards::d401_user_directory::service::render(&users));
        }
        Command::Export { out } => {
            let path = out.unwrap_or_else(|| PathBuf::from(&config.export.path));
            let mut projects = session.visible(&snapshot.projects);
            projects.sort_by(|a, b| a.name.cmp(&b.name));

            let written = projections::p900_deployment_plan::service::export_deployment_plan(
                source.as_ref(),
                &snapshot,
                &projects,
                &path,
            )
            .await?;
            println!("{} project(s) exported to {}", written, path.display());
        }
        Command::Help => print!("{}", usage()),
    }

    Ok(())
}
