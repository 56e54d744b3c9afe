use crate::frame_set::FrameSet;

/// Playback cursor for one clip: an integer frame index plus the
/// fractional seconds not yet converted into frame advances. The cursor
/// moves in whole steps only; fractional time never selects a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Playback {
    frame_index: usize,
    overflow: f32,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn overflow(&self) -> f32 {
        self.overflow
    }

    /// Cursor back to frame 0. The accumulated overflow is kept so a
    /// clip switch does not lose sub-frame time.
    pub fn rewind(&mut self) {
        self.frame_index = 0;
    }

    /// One discrete step. Past the last frame a looping clip wraps via
    /// modulo; a non-looping clip stays pinned on its final frame.
    pub fn advance(&mut self, frames: &FrameSet) {
        self.frame_index += 1;
        if self.frame_index >= frames.frame_count() {
            if frames.looped() {
                self.frame_index %= frames.frame_count();
            } else {
                self.frame_index -= 1;
            }
        }
    }

    /// Fixed-step catch-up: folds `delta_seconds` into the overflow and
    /// advances once per whole frame period contained in it, so a stall
    /// spanning several periods replays every missed frame step.
    /// Terminates because the frame period is positive by construction.
    pub fn accumulate(&mut self, delta_seconds: f32, frames: &FrameSet) {
        self.overflow += delta_seconds;
        let seconds_per_frame = frames.seconds_per_frame();
        while self.overflow >= seconds_per_frame {
            self.overflow -= seconds_per_frame;
            self.advance(frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_set::FrameCell;

    fn clip(count: u32, looped: bool, fps: u32) -> FrameSet {
        let frames = (0..count).map(|c| FrameCell::new(0, c)).collect();
        FrameSet::new(frames, looped, fps).unwrap()
    }

    #[test]
    fn looping_clip_wraps_modulo() {
        let frames = clip(4, true, 10);
        let mut playback = Playback::new();
        // N + k advances from 0 land on k mod N.
        for _ in 0..4 + 3 {
            playback.advance(&frames);
        }
        assert_eq!(playback.frame_index(), 3);
        playback.advance(&frames);
        assert_eq!(playback.frame_index(), 0);
    }

    #[test]
    fn non_looping_clip_pins_on_final_frame() {
        let frames = clip(3, false, 10);
        let mut playback = Playback::new();
        for _ in 0..10 {
            playback.advance(&frames);
        }
        assert_eq!(playback.frame_index(), 2);
    }

    #[test]
    fn accumulate_whole_periods_advances_exactly() {
        // fps 4 -> 0.25 s per frame, exactly representable in binary.
        let frames = clip(8, true, 4);
        let mut playback = Playback::new();
        playback.accumulate(3.0 * 0.25, &frames);
        assert_eq!(playback.frame_index(), 3);
        assert!(playback.overflow().abs() < 1e-6);
    }

    #[test]
    fn accumulate_carries_fractional_remainder() {
        // 0.35 s at 10 fps = 3.5 frame periods: three advances, 0.05 s left.
        let frames = clip(3, true, 10);
        let mut playback = Playback::new();
        playback.accumulate(0.35, &frames);
        assert_eq!(playback.frame_index(), 0); // 0 -> 1 -> 2 -> 0
        assert!((playback.overflow() - 0.05).abs() < 1e-3);
    }

    #[test]
    fn accumulate_below_one_period_does_not_advance() {
        let frames = clip(3, true, 10);
        let mut playback = Playback::new();
        playback.accumulate(0.09, &frames);
        assert_eq!(playback.frame_index(), 0);
        assert!((playback.overflow() - 0.09).abs() < 1e-6);
    }

    #[test]
    fn non_looping_clip_stays_pinned_across_updates() {
        let frames = clip(3, false, 10);
        let mut playback = Playback::new();
        for _ in 0..5 {
            playback.accumulate(0.5, &frames);
            assert_eq!(playback.frame_index(), 2);
        }
    }

    #[test]
    fn rewind_keeps_overflow() {
        let frames = clip(3, true, 10);
        let mut playback = Playback::new();
        playback.accumulate(0.15, &frames);
        let overflow = playback.overflow();
        playback.rewind();
        assert_eq!(playback.frame_index(), 0);
        assert_eq!(playback.overflow(), overflow);
    }
}
