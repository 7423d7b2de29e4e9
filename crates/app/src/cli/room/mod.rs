use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct RoomCommand {
    #[command(subcommand)]
    command: RoomSubcommand,
}

#[derive(Debug, Subcommand)]
enum RoomSubcommand {
    /// Register a room appointments can be booked in
    Create(create::CreateRoomArgs),
}

pub(crate) async fn run(command: RoomCommand) -> Result<(), String> {
    match command.command {
        RoomSubcommand::Create(args) => create::run(args).await,
    }
}
