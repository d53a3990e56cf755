/// Fixed-step virtual time source for the per-frame update.
///
/// Time starts at `0` and advances by `step` before each frame, so the
/// first frame sees `t = step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    time: f64,
    step: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new(step: f64) -> Self {
        Self {
            time: 0.0,
            step,
            frames: 0,
        }
    }

    /// Advances one frame and returns the new time.
    pub fn advance(&mut self) -> f64 {
        self.time += self.step;
        self.frames += 1;
        self.time
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
