use clap::{Parser, Subcommand};

mod db;
mod room;

#[derive(Debug, Parser)]
#[command(name = "hospital-app", about = "Hospital CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Room(room::RoomCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Room(command) => room::run(command).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_db_migrate_with_explicit_url() {
        let cli = Cli::try_parse_from([
            "hospital-app",
            "db",
            "migrate",
            "--database-url",
            "postgres://localhost/hospital",
        ]);

        assert!(cli.is_ok(), "{cli:?}");
    }

    #[test]
    fn room_create_requires_a_name() {
        let cli = Cli::try_parse_from([
            "hospital-app",
            "room",
            "create",
            "--database-url",
            "postgres://localhost/hospital",
        ]);

        assert!(cli.is_err());
    }
}
