//! Decorative particle layer drawn behind the current-conditions card.
//!
//! Positions live in unit space (0.0..1.0 on both axes) so the field can be
//! drawn into any area without knowing its size when it ticks.

use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
    widgets::Widget,
};
use weather_core::VisualFamily;

const RAIN_DROPS: usize = 60;
const RAIN_RIPPLES: usize = 5;
const SUN_GLINTS: usize = 20;
const SUN_RAYS: usize = 8;
const CLOUD_PUFFS: usize = 8;

/// Where the sun sits inside the card, in unit space.
const SUN_CENTER: (f64, f64) = (0.88, 0.3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParticleKind {
    Drop,
    Ripple,
    Glint,
    Ray,
    Puff,
}

#[derive(Debug, Clone)]
struct Particle {
    kind: ParticleKind,
    x: f64,
    y: f64,
    /// Distance per tick along the particle's direction of travel.
    speed: f64,
    /// Position in the particle's own loop, 0.0..1.0.
    phase: f64,
}

/// Self-looping animation for one visual family.
#[derive(Debug)]
pub struct ParticleField {
    family: VisualFamily,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(family: VisualFamily) -> Self {
        Self::with_rng(family, StdRng::from_entropy())
    }

    pub fn seeded(family: VisualFamily, seed: u64) -> Self {
        Self::with_rng(family, StdRng::seed_from_u64(seed))
    }

    fn with_rng(family: VisualFamily, rng: StdRng) -> Self {
        let mut field = Self { family, particles: Vec::new(), rng };
        field.spawn();
        field
    }

    pub fn family(&self) -> VisualFamily {
        self.family
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Swap to another family's particles. Same family keeps the current loop.
    pub fn set_family(&mut self, family: VisualFamily) {
        if family != self.family {
            self.family = family;
            self.spawn();
        }
    }

    fn spawn(&mut self) {
        self.particles.clear();

        match self.family {
            VisualFamily::Rain => {
                for _ in 0..RAIN_DROPS {
                    let p = Particle {
                        kind: ParticleKind::Drop,
                        x: self.rng.gen_range(0.0..1.0),
                        y: self.rng.gen_range(-0.2..1.0),
                        speed: self.rng.gen_range(0.04..0.07),
                        phase: 0.0,
                    };
                    self.particles.push(p);
                }
                for _ in 0..RAIN_RIPPLES {
                    let p = Particle {
                        kind: ParticleKind::Ripple,
                        x: self.rng.gen_range(0.0..1.0),
                        y: 1.0,
                        speed: 0.05,
                        phase: self.rng.gen_range(0.0..1.0),
                    };
                    self.particles.push(p);
                }
            }
            VisualFamily::Sunny => {
                for _ in 0..SUN_GLINTS {
                    let p = Particle {
                        kind: ParticleKind::Glint,
                        x: self.rng.gen_range(0.0..1.0),
                        y: self.rng.gen_range(0.0..1.0),
                        speed: self.rng.gen_range(0.03..0.08),
                        phase: self.rng.gen_range(0.0..1.0),
                    };
                    self.particles.push(p);
                }
                for i in 0..SUN_RAYS {
                    let p = Particle {
                        kind: ParticleKind::Ray,
                        x: SUN_CENTER.0,
                        y: SUN_CENTER.1,
                        speed: 0.02,
                        // Rays are spread evenly around the sun.
                        phase: i as f64 / SUN_RAYS as f64,
                    };
                    self.particles.push(p);
                }
            }
            VisualFamily::Cloud => {
                for _ in 0..CLOUD_PUFFS {
                    let p = Particle {
                        kind: ParticleKind::Puff,
                        x: self.rng.gen_range(-0.1..1.1),
                        y: self.rng.gen_range(0.05..0.6),
                        speed: self.rng.gen_range(0.002..0.006),
                        phase: 0.0,
                    };
                    self.particles.push(p);
                }
            }
            VisualFamily::Default => {}
        }
    }

    /// Advance every particle by one frame.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            match p.kind {
                ParticleKind::Drop => {
                    p.y += p.speed;
                    if p.y > 1.0 {
                        p.y = -self.rng.gen_range(0.0..0.2);
                        p.x = self.rng.gen_range(0.0..1.0);
                    }
                }
                ParticleKind::Ripple => {
                    p.phase += p.speed;
                    if p.phase >= 1.0 {
                        p.phase = 0.0;
                        p.x = self.rng.gen_range(0.0..1.0);
                    }
                }
                ParticleKind::Glint | ParticleKind::Ray => {
                    p.phase = (p.phase + p.speed).fract();
                }
                ParticleKind::Puff => {
                    p.x += p.speed;
                    if p.x > 1.1 {
                        p.x = -0.1;
                    }
                }
            }
        }
    }
}

/// Draws a [`ParticleField`] into the blank cells of an area.
///
/// Cells that already hold text are left alone, so the layer can be drawn
/// after the card's content.
pub struct ParticleLayer<'a> {
    field: &'a ParticleField,
    color: Color,
}

impl<'a> ParticleLayer<'a> {
    pub fn new(field: &'a ParticleField, color: Color) -> Self {
        Self { field, color }
    }
}

impl Widget for ParticleLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for p in &self.field.particles {
            let (x, y, symbol) = match p.kind {
                ParticleKind::Drop => (p.x, p.y, "╎"),
                ParticleKind::Ripple => {
                    let symbol = if p.phase < 0.33 {
                        "·"
                    } else if p.phase < 0.66 {
                        "o"
                    } else {
                        "O"
                    };
                    (p.x, p.y, symbol)
                }
                ParticleKind::Glint => {
                    // Only visible for the bright half of the loop.
                    if p.phase > 0.5 {
                        continue;
                    }
                    (p.x, p.y, if p.phase < 0.25 { "+" } else { "*" })
                }
                ParticleKind::Ray => {
                    let angle = p.phase * std::f64::consts::TAU;
                    let reach = 0.12;
                    let x = p.x + angle.cos() * reach;
                    let y = p.y + angle.sin() * reach * 2.0;
                    (x, y, ray_symbol(angle))
                }
                ParticleKind::Puff => (p.x, p.y, "☁"),
            };

            if let Some(pos) = to_cell(area, x, y) {
                if let Some(cell) = buf.cell_mut(pos) {
                    if cell.symbol() == " " {
                        cell.set_symbol(symbol).set_fg(self.color);
                    }
                }
            }
        }
    }
}

fn ray_symbol(angle: f64) -> &'static str {
    let octant = ((angle / std::f64::consts::FRAC_PI_4).round() as i64).rem_euclid(4);
    match octant {
        0 => "─",
        1 => "╲",
        2 => "│",
        _ => "╱",
    }
}

fn to_cell(area: Rect, x: f64, y: f64) -> Option<Position> {
    if !(0.0..1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        return None;
    }

    let col = (x * f64::from(area.width)) as u16;
    let row = ((y * f64::from(area.height)) as u16).min(area.height - 1);
    Some(Position::new(area.x + col.min(area.width - 1), area.y + row))
}
