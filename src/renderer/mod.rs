//! Frame rendering
//!
//! Draws the game through an abstract [`Canvas`]. Pixel formats, image
//! decoding and fonts are the canvas implementation's business.

pub mod sprites;

pub use sprites::Sprite;

use crate::consts::*;
use crate::game::Game;
use crate::menu::{Menu, MenuPage};
use crate::settings::Settings;
use crate::sim::{Scene, Session};

/// Approximate glyph width used to center banner text
pub const GLYPH_WIDTH: i32 = 12;
/// Alpha of the dark overlay on an invulnerable ship
pub const HURT_SHADE_ALPHA: u8 = 127;
/// Width of the title logo image
const TITLE_WIDTH: i32 = 486;

/// Drawing surface
pub trait Canvas {
    fn blit(&mut self, sprite: Sprite, x: i32, y: i32);
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
    /// Darken a rectangle with a translucent black overlay
    fn shade(&mut self, x: i32, y: i32, w: i32, h: i32, alpha: u8);
}

/// Draw one frame of the game
pub fn render(game: &Game, canvas: &mut dyn Canvas) {
    let bg = game.background_y();
    canvas.blit(Sprite::Background, 0, bg);
    canvas.blit(Sprite::Background, 0, bg - BACKGROUND_HEIGHT);

    match (game.scene(), game.session()) {
        (Scene::Title, _) | (_, None) => draw_title(game.menu(), game.settings(), canvas),
        (scene, Some(session)) => {
            if scene == Scene::Play {
                draw_player(session, canvas);
            }
            draw_enemies(session, canvas);
            draw_explosions(session, canvas);
            draw_lasers(session, canvas);
            draw_hud(session, canvas);
            draw_banner(session, canvas);
        }
    }
}

fn draw_title(menu: &Menu, settings: &Settings, canvas: &mut dyn Canvas) {
    let xoff = match menu.page {
        MenuPage::Main => 0,
        MenuPage::Options => -30,
    };
    for (i, label) in menu.labels(settings).iter().enumerate() {
        canvas.draw_text(280 + xoff, 300 + i as i32 * 20, label);
    }
    canvas.blit(Sprite::MenuCursor, 260 + xoff, 300 + menu.selection as i32 * 20);
    canvas.blit(Sprite::Title, (WIDTH - TITLE_WIDTH) / 2, 50);
}

fn draw_player(session: &Session, canvas: &mut dyn Canvas) {
    let p = &session.player;
    if !p.alive {
        return;
    }
    let sprite = Sprite::Player {
        frame: p.frame,
        hurt: p.invulnerable,
    };
    canvas.blit(sprite, p.rect.x, p.rect.y);
    if p.invulnerable {
        canvas.shade(p.rect.x, p.rect.y, p.rect.w, p.rect.h, HURT_SHADE_ALPHA);
    }
}

fn draw_enemies(session: &Session, canvas: &mut dyn Canvas) {
    for e in session.enemies.iter().filter(|e| e.alive) {
        let sprite = Sprite::Enemy {
            kind: e.kind,
            frame: e.frame,
        };
        canvas.blit(sprite, e.rect.x, e.rect.y);
    }
}

fn draw_explosions(session: &Session, canvas: &mut dyn Canvas) {
    for e in session.explosions.iter_alive() {
        canvas.blit(Sprite::Explosion { frame: e.frame }, e.rect.x, e.rect.y);
    }
}

fn draw_lasers(session: &Session, canvas: &mut dyn Canvas) {
    let pools = std::iter::once(&session.player.lasers)
        .chain(session.enemies.iter().map(|e| &e.lasers));
    for pool in pools {
        for l in pool.iter_alive() {
            canvas.blit(Sprite::Laser(pool.owner()), l.rect.x, l.rect.y);
        }
    }
}

fn draw_hud(session: &Session, canvas: &mut dyn Canvas) {
    let p = &session.player;
    canvas.draw_text(5, 5 + BOTTOM, &format!("Score: {}", p.score));
    canvas.draw_text(WIDTH - 200, 5 + BOTTOM, "Health");
    for i in 0..MAX_HEALTH {
        let pip = if i < p.health {
            Sprite::HealthFull
        } else {
            Sprite::HealthEmpty
        };
        canvas.blit(pip, WIDTH - 120 + i * 18, 3 + BOTTOM);
    }
}

fn draw_banner(session: &Session, canvas: &mut dyn Canvas) {
    let banner = &session.banner;
    if banner.is_visible() {
        let x = (WIDTH - banner.text.len() as i32 * GLYPH_WIDTH) / 2;
        canvas.draw_text(x, 200, &banner.text);
    }
}
