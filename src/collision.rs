//! Group-vs-group collision resolution.
//!
//! Three pairings run in a fixed order every tick:
//!
//! 1. player lasers vs enemies: the enemy explodes and the laser is spent.
//!    Wrecks still absorb lasers while their explosion plays.
//! 2. player vs enemies: both must be alive; both explode.
//! 3. player vs enemy lasers: both must be alive; the player explodes and
//!    the laser is spent.
//!
//! The player's alive flag is re-read for every pair, so once one hit kills
//! the player nothing else in the same tick can kill it again.

use crate::actor::Actor;
use crate::config::Config;
use crate::enemy::Enemy;
use crate::events::GameEvent;
use crate::physics::Physics;
use crate::player::Player;
use crate::projectile::Projectile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Enemies that exploded this tick.
    pub enemies_destroyed: usize,
    pub lasers_spent: usize,
    pub player_killed: bool,
}

pub fn resolve<P: Physics + ?Sized>(
    physics: &P,
    player: &mut Player,
    enemies: &mut [Enemy],
    enemy_lasers: &mut [Projectile],
    player_lasers: &mut [Projectile],
    config: &Config,
    events: &mut Vec<GameEvent>,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    for laser in player_lasers.iter_mut() {
        if laser.actor.is_removed() {
            continue;
        }
        let Some(enemy) = enemies
            .iter_mut()
            .find(|e| !e.actor.is_removed() && physics.overlaps(&laser.actor, &e.actor))
        else {
            continue;
        };
        enemy.on_destroy();
        if enemy.explode(true, config) {
            report.enemies_destroyed += 1;
            push_exploded(events, &enemy.actor);
        }
        laser.actor.destroy();
        report.lasers_spent += 1;
    }

    for enemy in enemies.iter_mut() {
        if !player.is_alive() || enemy.is_dead() || enemy.actor.is_removed() {
            continue;
        }
        if !physics.overlaps(&player.actor, &enemy.actor) {
            continue;
        }
        kill_player(player, config, events, &mut report);
        if enemy.explode(true, config) {
            report.enemies_destroyed += 1;
            push_exploded(events, &enemy.actor);
        }
    }

    for laser in enemy_lasers.iter_mut() {
        if !player.is_alive() || laser.actor.is_dead() || laser.actor.is_removed() {
            continue;
        }
        if !physics.overlaps(&player.actor, &laser.actor) {
            continue;
        }
        kill_player(player, config, events, &mut report);
        laser.actor.destroy();
        report.lasers_spent += 1;
    }

    report
}

fn kill_player(
    player: &mut Player,
    config: &Config,
    events: &mut Vec<GameEvent>,
    report: &mut CollisionReport,
) {
    if player.die(config) {
        report.player_killed = true;
        push_exploded(events, &player.actor);
    }
}

fn push_exploded(events: &mut Vec<GameEvent>, actor: &Actor) {
    events.push(GameEvent::Exploded {
        id: actor.id,
        kind: actor.kind,
        pos: actor.pos,
    });
}
