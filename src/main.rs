use anyhow::Result;
use tictactoe::board::Player;
use tictactoe::session::Mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mode = match std::env::args().nth(1).as_deref() {
        None | Some("pvc") => Mode::PlayerVsComputer {
            computer: Player::O,
        },
        Some("pvp") => Mode::PlayerVsPlayer,
        Some(other) => anyhow::bail!("unknown mode {other:?}, expected pvp or pvc"),
    };

    tictactoe::term::play(mode).await
}
