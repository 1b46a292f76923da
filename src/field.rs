//! Closed-form field patterns.
//!
//! Each pattern maps a cell position and time to a value in [-1, 1]. An optional
//! pointer position adds a decaying ripple around it.

use crate::config::{DEFAULT_POINTER_INFLUENCE, POINTER_FALLOFF, POINTER_INFLUENCE};
use crate::render::value_to_glyph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldPattern {
    /// Radial waves from the centre
    Balance,
    /// Two opposing wave fields blended left to right
    Duality,
    /// Spiral arms around the centre
    Flow,
    /// Three interfering wave products
    Chaos,
}

impl FieldPattern {
    pub const ALL: [FieldPattern; 4] = [
        FieldPattern::Balance,
        FieldPattern::Duality,
        FieldPattern::Flow,
        FieldPattern::Chaos,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldPattern::Balance => "Balance",
            FieldPattern::Duality => "Duality",
            FieldPattern::Flow => "Flow",
            FieldPattern::Chaos => "Chaos",
        }
    }

    /// Position in [`FieldPattern::ALL`]
    pub fn index(self) -> usize {
        match self {
            FieldPattern::Balance => 0,
            FieldPattern::Duality => 1,
            FieldPattern::Flow => 2,
            FieldPattern::Chaos => 3,
        }
    }

    /// The following pattern, wrapping after the last
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Raw field value before pointer influence and clamping
    fn base(self, x: f64, y: f64, t: f64, width: f64, height: f64) -> f64 {
        let (dx, dy) = (x - width / 2.0, y - height / 2.0);
        let distance = dx.hypot(dy);

        match self {
            FieldPattern::Balance => (distance * 0.5 - t * 0.05).sin() * (t * 0.03).cos(),
            FieldPattern::Duality => {
                let left = (x * 0.3 + t * 0.05).sin() * (y * 0.2).cos();
                let right = (x * 0.3 - t * 0.05).cos() * (y * 0.2).sin();
                let blend = x / width;
                left * (1.0 - blend) + right * blend
            }
            FieldPattern::Flow => {
                let angle = dy.atan2(dx);
                (angle * 3.0 + distance * 0.2 - t * 0.08).sin() * (distance * 0.1 + t * 0.05).cos()
            }
            FieldPattern::Chaos => {
                let a = (x * 0.1 + t * 0.03).sin() * (y * 0.15 + t * 0.04).cos();
                let b = (x * 0.08 - t * 0.02).sin() * (y * 0.12 - t * 0.05).sin();
                let c = (x * 0.12 + y * 0.1 + t * 0.06).cos();
                (a + b + c) / 3.0
            }
        }
    }

    /// Field value at `(x, y)` and time `t`, clamped to [-1, 1]
    pub fn evaluate(
        self,
        x: f64,
        y: f64,
        t: f64,
        width: f64,
        height: f64,
        pointer: Option<(f64, f64)>,
    ) -> f64 {
        self.evaluate_styled(x, y, t, width, height, pointer, FieldStyle::default())
    }

    /// Like [`FieldPattern::evaluate`] with the pointer ripple weighted by
    /// `style.pointer_influence` and the sum scaled by `style.gain` before clamping
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate_styled(
        self,
        x: f64,
        y: f64,
        t: f64,
        width: f64,
        height: f64,
        pointer: Option<(f64, f64)>,
        style: FieldStyle,
    ) -> f64 {
        let mut value = self.base(x, y, t, width, height);

        if let Some((px, py)) = pointer {
            let pointer_distance = (x - px).hypot(y - py);
            let ripple = (-pointer_distance * POINTER_FALLOFF).exp() * (t * 2.0).sin();
            value += ripple * POINTER_INFLUENCE * style.pointer_influence;
        }

        (value * style.gain).clamp(-1.0, 1.0)
    }
}

/// Playback modifiers applied on top of the raw field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStyle {
    /// Multiplier on the final value, before clamping
    pub gain: f64,
    /// Multiplier on the pointer ripple, 0 disables it
    pub pointer_influence: f64,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            gain: 1.0,
            pointer_influence: DEFAULT_POINTER_INFLUENCE,
        }
    }
}

/// Render a whole field as newline-terminated rows of shade glyphs
pub fn render_field(
    pattern: FieldPattern,
    width: usize,
    height: usize,
    t: f64,
    pointer: Option<(f64, f64)>,
    style: FieldStyle,
) -> String {
    let mut out = String::with_capacity((width + 1) * height * 3);
    let (w, h) = (width as f64, height as f64);

    for y in 0..height {
        for x in 0..width {
            let value = pattern.evaluate_styled(x as f64, y as f64, t, w, h, pointer, style);
            out.push(value_to_glyph(value));
        }
        out.push('\n');
    }

    out
}
