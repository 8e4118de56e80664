//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! world.  No game logic is performed; this module only translates world
//! coordinates into terminal cells and queues the drawing commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_shooter::enemy::{ChaserMode, Enemy, EnemyKind};
use space_shooter::parallax::ParallaxLayerPair;
use space_shooter::projectile::Projectile;
use space_shooter::{ActorKind, Lifecycle, World};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_GUN_SHIP: Color = Color::Green;
const C_CHASER_DRIFT: Color = Color::Red;
const C_CHASER_CHASE: Color = Color::Magenta;
const C_CARRIER: Color = Color::Yellow;
const C_EXPLOSION: Color = Color::DarkYellow;
const C_LASER_PLAYER: Color = Color::Cyan;
const C_LASER_ENEMY: Color = Color::Magenta;
const C_STAR: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

/// Stars per background strip.
const STARS_PER_STRIP: u32 = 7;

// ── Screen mapping ────────────────────────────────────────────────────────────

/// Terminal area and the world → cell transform for the play field
/// (inside the border, rows 2 .. height-2).
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub cols: u16,
    pub rows: u16,
    world_w: f32,
    world_h: f32,
}

impl Screen {
    pub fn new(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Self {
        Self { cols, rows, world_w, world_h }
    }

    fn field_cols(&self) -> f32 {
        self.cols.saturating_sub(3).max(1) as f32
    }

    fn field_rows(&self) -> f32 {
        self.rows.saturating_sub(5).max(1) as f32
    }

    /// Cell for a world point, or `None` when it falls outside the field.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || x > self.world_w || y > self.world_h {
            return None;
        }
        let col = 1.0 + (x / self.world_w * self.field_cols()).round();
        let row = 2.0 + (y / self.world_h * self.field_rows()).round();
        Some((col as u16, row as u16))
    }
}

// ── HUD state kept by the front-end ───────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct Hud {
    pub kills: u32,
    pub shots: u32,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    world: &World,
    hud: &Hud,
    screen: &Screen,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for pair in &world.background.pairs {
        draw_strip(out, pair, screen)?;
    }

    draw_border(out, screen)?;
    draw_hud(out, world, hud, screen)?;

    for enemy in &world.enemies {
        draw_enemy(out, enemy, screen)?;
    }
    for laser in world.enemy_lasers.iter().chain(&world.player_lasers) {
        draw_laser(out, laser, screen)?;
    }

    draw_player(out, world, screen)?;
    draw_controls_hint(out, screen)?;

    if world.is_game_over() {
        draw_game_over(out, hud, screen)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, screen: &Screen) -> std::io::Result<()> {
    let w = screen.cols as usize;
    let h = screen.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

/// Scatter a fixed star pattern over both copies of a strip.  Faster pairs
/// get brighter glyphs so the layers read as depth.
fn draw_strip<W: Write>(
    out: &mut W,
    pair: &ParallaxLayerPair,
    screen: &Screen,
) -> std::io::Result<()> {
    if pair.velocity_y == 0.0 {
        return Ok(());
    }
    let glyph = if pair.velocity_y >= 30.0 { "+" } else { "." };
    out.queue(style::SetForegroundColor(C_STAR))?;
    for layer in &pair.layers {
        let seed = pair.velocity_y as u32;
        for k in 0..STARS_PER_STRIP {
            // Cheap fixed scatter; the pattern only has to be stable.
            let fx = ((k * 37 + seed * 11) % 97) as f32 / 97.0;
            let fy = ((k * 53 + seed * 7) % 89) as f32 / 89.0;
            let sx = fx * screen.world_w;
            let sy = layer.y + fy * pair.layer_height;
            let sx = if layer.flip_x { screen.world_w - sx } else { sx };
            if let Some((col, row)) = screen.cell(sx, sy) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    world: &World,
    hud: &Hud,
    screen: &Screen,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Kills:{:>4}  Shots:{:>5}", hud.kills, hud.shots)))?;

    let right = format!(
        "Ships:{:>3}  Lasers:{:>3}  Next:{:>3}",
        world.enemies.len(),
        world.enemy_lasers.len() + world.player_lasers.len(),
        world.spawner.ticks_until_spawn()
    );
    let rx = screen.cols.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&right))?;
    Ok(())
}

// ── Actors ────────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, world: &World, screen: &Screen) -> std::io::Result<()> {
    let actor = &world.player.actor;
    let Some((col, row)) = screen.cell(actor.pos.x, actor.pos.y) else {
        return Ok(());
    };
    match actor.lifecycle() {
        Lifecycle::Hidden | Lifecycle::Removed => {}
        Lifecycle::Exploding { .. } => {
            out.queue(style::SetForegroundColor(C_EXPLOSION))?;
            out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
            out.queue(Print("\\|/"))?;
            out.queue(cursor::MoveTo(col.saturating_sub(1), row + 1))?;
            out.queue(Print("/|\\"))?;
        }
        Lifecycle::Active => {
            // Sprite (2 rows, 3 cols):
            //   ▲       ← row      (tip)
            //  /█\      ← row + 1  (fuselage + wings)
            out.queue(style::SetForegroundColor(C_PLAYER))?;
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("▲"))?;
            if row + 1 < screen.rows.saturating_sub(2) {
                out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
                out.queue(Print("/█\\"))?;
            }
        }
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, screen: &Screen) -> std::io::Result<()> {
    let Some((col, row)) = screen.cell(enemy.actor.pos.x, enemy.actor.pos.y) else {
        return Ok(());
    };
    let lx = col.saturating_sub(1).max(1);
    out.queue(cursor::MoveTo(lx, row))?;

    if enemy.is_dead() {
        out.queue(style::SetForegroundColor(C_EXPLOSION))?;
        out.queue(Print("✶✶✶"))?;
        return Ok(());
    }

    let (color, sprite) = match (enemy.kind(), enemy.mode()) {
        (EnemyKind::GunShip, _) => (C_GUN_SHIP, "«▼»"),
        (EnemyKind::ChaserShip, Some(ChaserMode::Chasing)) => (C_CHASER_CHASE, "(◉)"),
        (EnemyKind::ChaserShip, _) => (C_CHASER_DRIFT, "(◎)"),
        (EnemyKind::CarrierShip, _) => (C_CARRIER, "[═]"),
    };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_laser<W: Write>(out: &mut W, laser: &Projectile, screen: &Screen) -> std::io::Result<()> {
    let Some((col, row)) = screen.cell(laser.actor.pos.x, laser.actor.pos.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    match laser.actor.kind {
        ActorKind::PlayerLaser => {
            out.queue(style::SetForegroundColor(C_LASER_PLAYER))?;
            out.queue(Print("║"))?;
        }
        _ => {
            out.queue(style::SetForegroundColor(C_LASER_ENEMY))?;
            out.queue(Print("↓"))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, screen: &Screen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, screen.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("WASD / arrows : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, hud: &Hud, screen: &Screen) -> std::io::Result<()> {
    let kills_line = format!("Ships destroyed: {:>4}", hud.kills);
    let hint = "R - Play Again  Q - Quit";

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (kills_line.as_str(), Color::Yellow),
        (hint, Color::White),
    ];

    let cx = screen.cols / 2;
    let start_row = (screen.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
