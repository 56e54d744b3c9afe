use serde::{Deserialize, Serialize};

/// Per-frame time value threaded through every scene callback.
/// `delta` is seconds since the previous frame, `elapsed` is total
/// seconds since startup and only ever increases.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Timing {
    pub delta: f32,
    pub elapsed: f32,
}

impl Timing {
    pub fn new(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }

    /// Advance by one frame period, accumulating into `elapsed`.
    pub fn step(&mut self, delta: f32) {
        self.delta = delta;
        self.elapsed += delta;
    }
}
