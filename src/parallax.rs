//! Scrolling background.
//!
//! Each [`ParallaxLayerPair`] holds two copies of the same strip stacked
//! vertically.  Both move at the pair's velocity; when the upper copy's top
//! edge crosses into view the pair jumps back by one strip height, so the
//! second copy always starts exactly where the first ends.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub y: f32,
    /// Mirroring picked once at creation, presentation only.
    pub flip_x: bool,
    pub flip_y: bool,
    pub depth: i32,
}

impl ParallaxLayer {
    fn random(index: usize, layer_height: f32, rng: &mut impl Rng) -> Self {
        Self {
            y: layer_height * index as f32,
            flip_x: rng.gen_range(0..=10) >= 5,
            flip_y: rng.gen_range(0..=10) >= 5,
            depth: -5 - (index as i32 - 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxLayerPair {
    pub layers: [ParallaxLayer; 2],
    pub velocity_y: f32,
    pub layer_height: f32,
}

impl ParallaxLayerPair {
    pub fn new(velocity_y: f32, layer_height: f32, rng: &mut impl Rng) -> Self {
        let first = ParallaxLayer::random(0, layer_height, rng);
        let second = ParallaxLayer::random(1, layer_height, rng);
        Self {
            layers: [first, second],
            velocity_y,
            layer_height,
        }
    }

    pub fn update(&mut self, dt: f32) {
        let h = self.layer_height;
        let mut top = self.layers[0].y + self.velocity_y * dt;
        if top > 0.0 || top <= -h {
            top = top.rem_euclid(h) - h;
        }
        for (i, layer) in self.layers.iter_mut().enumerate() {
            layer.y = top + h * i as f32;
        }
    }
}

/// The full background: `count` pairs, the i-th scrolling at `i * step`.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub pairs: Vec<ParallaxLayerPair>,
}

impl Background {
    pub fn new(count: usize, step: f32, layer_height: f32, rng: &mut impl Rng) -> Self {
        let pairs = (0..count)
            .map(|i| ParallaxLayerPair::new(i as f32 * step, layer_height, rng))
            .collect();
        Self { pairs }
    }

    pub fn update(&mut self, dt: f32) {
        for pair in &mut self.pairs {
            pair.update(dt);
        }
    }
}
