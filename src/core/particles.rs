use super::constants::{PARTICLE_FLOAT_SECS, PARTICLE_OPACITY, PARTICLE_SIZE_PX};
use super::stylesheet::FLOAT_KEYFRAMES;
use rand::Rng;

/// Randomised parameters of one decorative floating particle. Width and height
/// are drawn independently, so particles can be slightly elliptical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub width_px: f32,
    pub height_px: f32,
    pub opacity: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub float_secs: f32,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (min, max) = PARTICLE_SIZE_PX;
        Self {
            width_px: rng.gen_range(min..max),
            height_px: rng.gen_range(min..max),
            opacity: rng.gen_range(PARTICLE_OPACITY.0..PARTICLE_OPACITY.1),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            float_secs: rng.gen_range(PARTICLE_FLOAT_SECS.0..PARTICLE_FLOAT_SECS.1),
        }
    }

    /// Inline style for the particle element.
    pub fn css(&self) -> String {
        format!(
            "position:absolute;width:{width:.2}px;height:{height:.2}px;\
             background:rgba(59, 130, 246, {opacity:.3});border-radius:50%;\
             left:{left:.2}%;top:{top:.2}%;\
             animation:{anim} {secs:.2}s ease-in-out infinite;\
             pointer-events:none;z-index:1",
            width = self.width_px,
            height = self.height_px,
            opacity = self.opacity,
            left = self.left_pct,
            top = self.top_pct,
            anim = FLOAT_KEYFRAMES,
            secs = self.float_secs,
        )
    }
}

pub fn particle_field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}
