//! Example Defense - a headless tower defense run built on tower_core
//!
//! This demo shows:
//! - Loading actors, items, drops and waves from TOML
//! - Enemies walking a lane toward the tower
//! - Seeded combat with crits, armour and cooldowns
//! - Distance-scaled loot drops feeding the tower's equipment
//! - High score persistence between runs

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tower_core::prelude::*;
use tracing::info;

const SPAWN_DISTANCE: f64 = 30.0;
const TOWER_RANGE: f64 = 24.0;
const MELEE_RANGE: f64 = 1.5;
const WALK_SPEED: f64 = 2.0;
const SPAWN_INTERVAL: f64 = 1.2;
const TICK: f64 = 0.1;
const SCORE_FILE: &str = "high_score.json";

/// One enemy on the lane, walking toward the tower at position zero
struct LaneEnemy {
    actor: Actor,
    name: String,
    position: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "example_defense=info".into()),
        )
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2024);

    if let Err(err) = run(seed) {
        eprintln!("game error: {err}");
        std::process::exit(1);
    }
}

fn run(seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let data: GameData = parse_toml(include_str!("../data/game.toml"))?;
    data.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tower = data.actors["tower"].spawn()?;
    let drop_table = data.drop_table();
    let store = JsonScoreStore::new(SCORE_FILE);
    let mut board = ScoreBoard::new(store.load()?);

    info!(seed, high_score = board.high_score(), "run starting");

    let mut scheduler: Scheduler<SpawnEvent> = Scheduler::new();
    let mut waves = WaveQueue::new(data.waves.clone());
    let mut lane: Vec<LaneEnemy> = Vec::new();
    let mut now = 0.0;

    waves.start_next(now, SPAWN_INTERVAL, &mut scheduler);

    while tower.is_alive() {
        for spawn in scheduler.drain_due(now) {
            let actor = data.actors[&spawn.enemy_id].spawn()?;
            lane.push(LaneEnemy {
                actor,
                name: spawn.enemy_id,
                position: SPAWN_DISTANCE,
            });
        }

        // Enemies advance until they reach melee range
        for enemy in &mut lane {
            if enemy.position > MELEE_RANGE {
                enemy.position = (enemy.position - WALK_SPEED * TICK).max(MELEE_RANGE);
            }
        }

        // Tower fires at the closest enemy in range
        if let Some(target) = lane
            .iter_mut()
            .filter(|e| e.position <= TOWER_RANGE)
            .min_by(|a, b| a.position.total_cmp(&b.position))
        {
            if let Some(event) = tower.attack(&mut target.actor, now, &mut rng) {
                if event.target_died {
                    info!(enemy = %target.name, "{}", event.summary());
                    board.add(10);
                    handle_drop(&drop_table, target.position, &mut tower, &mut rng);
                }
            }
        }

        // Anything at the wall swings back
        for enemy in lane.iter_mut().filter(|e| e.position <= MELEE_RANGE) {
            if let Some(event) = enemy.actor.attack(&mut tower, now, &mut rng) {
                if event.target_died {
                    info!(enemy = %enemy.name, "the tower has fallen");
                }
            }
        }
        lane.retain(|e| e.actor.is_alive());

        if lane.is_empty() && scheduler.is_empty() {
            if !waves.start_next(now, SPAWN_INTERVAL, &mut scheduler) {
                break;
            }
            info!(wave = waves.current_wave(), "next wave inbound");
        }

        now += TICK;
    }

    let survived = tower.is_alive();
    let new_high = board.finish();
    if new_high {
        store.save(board.high_score())?;
    }

    println!("==============================");
    if survived {
        println!("Victory! All waves cleared in {now:.1}s");
    } else {
        println!("Defeat after {now:.1}s");
    }
    println!(
        "Score: {}{}  High score: {}",
        board.score(),
        if new_high { " (new best!)" } else { "" },
        board.high_score()
    );
    println!(
        "Tower: {:.0}/{:.0} health, {} items equipped",
        tower.health().current(),
        tower.health().max(),
        tower.ledger().equipped().len()
    );
    println!("==============================");
    Ok(())
}

/// Roll for loot where the enemy fell. Kills close to the tower drop more
/// often. New gear is equipped when there is room, otherwise stashed.
fn handle_drop(table: &DropTable, death_position: f64, tower: &mut Actor, rng: &mut ChaCha8Rng) {
    let spawn_sq = SPAWN_DISTANCE * SPAWN_DISTANCE;
    let death_sq = death_position * death_position;
    if !table.roll_for_drop(spawn_sq, death_sq, rng) {
        return;
    }
    let rarity = table.roll_rarity(rng);
    let Some(item) = table.random_item(rarity, rng).cloned() else {
        return;
    };
    info!(item = %item.name(), colour = item.rarity().colour(), "loot dropped");

    let has_room = tower.ledger().equipped().len() < tower.ledger().equipped_capacity();
    if has_room && !tower.ledger().is_equipped(&item) && tower.equip(&item).is_ok() {
        return;
    }
    tower.add_to_inventory(item);
}
