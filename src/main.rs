use activity_board::app::terminal::TerminalSurface;
use activity_board::app::ActivityBoard;
use activity_board::client::request::NoWasmClient;
use activity_board::config::BoardConfig;
use activity_board::error::Result;
use activity_board::interface::HttpClient;
use activity_board::logging::init_logging;

fn usage(program: &str) {
    println!("Usage:");
    println!("  {program} list");
    println!("  {program} signup <activity> <email>");
    println!("  {program} remove <activity> <email>");
    println!();
    println!("The backend is read from ACTIVITY_BOARD_URL (default http://127.0.0.1:8000).");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("activity_board");

    let config = BoardConfig::from_env()?;
    let client = NoWasmClient::new(&config).await?;
    let board = ActivityBoard::with_config(client, TerminalSurface::stdout(), &config);

    match args.get(1..).unwrap_or_default() {
        [cmd] if cmd == "list" => board.initialize().await,
        [cmd, activity, email] if cmd == "signup" => {
            board.submit_signup(email, activity).await;
        }
        [cmd, activity, email] if cmd == "remove" => {
            board.remove_participant(activity, email).await;
        }
        _ => usage(program),
    }

    Ok(())
}
