//! Rapor CLI - student records and grade management.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let file = cli.file;

    let result = match cli.command {
        Some(Commands::Add { id, name, class }) => commands::add::run(file, id, name, class),

        Some(Commands::List { json }) => commands::list::run(file, json),

        Some(Commands::Show { id }) => commands::show::run(file, id),

        Some(Commands::Update { id, name, class }) => commands::update::run(file, id, name, class),

        Some(Commands::Remove { id, yes }) => commands::remove::run(file, id, yes),

        Some(Commands::Grade { id, subject, score }) => {
            commands::grade::run(file, id, subject, score)
        }

        Some(Commands::Top { n }) => commands::top::run(file, n),

        Some(Commands::Class { name }) => commands::class::run(file, name),

        Some(Commands::Stats { name, json }) => commands::stats::run(file, name, json),

        Some(Commands::Export {
            kind,
            top_n,
            class,
            id,
        }) => commands::export::run(file, kind, top_n, class, id),

        Some(Commands::Backup) => commands::backup::run(file),

        None => commands::menu::run(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
