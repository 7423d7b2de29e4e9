use clap::Args;
use hospital_app::{
    database::{self, Db},
    domain::rooms::{PgRoomsService, RoomsService, RoomsServiceError, data::NewRoom},
};

#[derive(Debug, Args)]
pub(crate) struct CreateRoomArgs {
    /// Room name
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateRoomArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("room name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgRoomsService::new(Db::new(pool));

    let room = service
        .create_room(NewRoom {
            room_name: args.name,
        })
        .await
        .map_err(|error| match error {
            RoomsServiceError::AlreadyExists => "room already exists".to_string(),
            error => format!("failed to create room: {error}"),
        })?;

    println!("room_name: {}", room.room_name);

    Ok(())
}
