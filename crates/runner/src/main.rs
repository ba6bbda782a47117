//! Gridbound Runner - demo driver binary
//!
//! The entity model lives in `gridbound-domain`. This binary is an ordinary
//! caller: it builds a player, walks it around, and prints the status report.

use gridbound_domain::{Direction, ItemName, Player, PlayerName, Position};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridbound=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut player = Player::new(
        PlayerName::new("Odin")?,
        10,
        50,
        Position::new(0, 0)?,
    )?;
    tracing::info!(player = %player.summary(), "Created player");

    if player.try_move(Direction::Down) {
        tracing::info!(position = %player.position(), "Moved down");
    }
    // The grid edge refuses the step; not an error
    if !player.try_move(Direction::Left) {
        tracing::info!(position = %player.position(), "Blocked at the grid edge");
    }

    player.add_to_inventory(ItemName::new("sword")?)?;
    player.add_to_inventory(ItemName::new("shield")?)?;
    tracing::info!(items = player.inventory().len(), "Picked up gear");

    let dealt = player.take_damage(10)?;
    tracing::info!(dealt, health = player.health(), "Took a hit");

    println!("{player}");
    Ok(())
}
