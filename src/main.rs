use anyhow::Result;
use clap::Parser;
use term_snake::game::GameConfig;
use term_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Snake on a bordered terminal playground")]
struct Cli {
    /// Milliseconds between game steps
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        // tokio intervals reject a zero period
        tick_interval_ms: cli.tick_ms.max(1),
        ..GameConfig::default()
    };

    let mut play = PlayMode::new(config);
    play.run().await?;

    // the terminal is restored; report the last run on plain stdout
    println!("===============================");
    println!("         GAME OVER !!!");
    println!();
    println!("         SCORE = {}", play.final_score());
    println!("===============================");

    Ok(())
}
