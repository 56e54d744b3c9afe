use indexmap::IndexMap;

use crate::error::{AnimationError, Result};
use crate::frame_set::{FrameCell, FrameSet};
use crate::playback::Playback;

/// A named-clip table plus the playback cursor over the active clip.
///
/// Invariants: the table is never empty, `active` is always one of its
/// keys, and the cursor index is always valid for the active clip.
/// Switching clips rewinds the cursor but keeps the time overflow.
#[derive(Clone, Debug)]
pub struct Animator {
    animations: IndexMap<String, FrameSet>,
    active: String,
    playback: Playback,
}

impl Animator {
    /// The first inserted clip becomes the active animation.
    pub fn new(animations: IndexMap<String, FrameSet>) -> Result<Self> {
        let Some(active) = animations.keys().next().cloned() else {
            return Err(AnimationError::NoAnimations);
        };
        Ok(Self {
            animations,
            active,
            playback: Playback::new(),
        })
    }

    pub fn animations(&self) -> &IndexMap<String, FrameSet> {
        &self.animations
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn active_frames(&self) -> &FrameSet {
        // Never panics: `active` is a table key by invariant.
        &self.animations[&self.active]
    }

    /// Switches the active clip, rejecting unknown names instead of
    /// leaving playback pointing at nothing.
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        if !self.animations.contains_key(name) {
            return Err(AnimationError::MissingAnimation(name.to_string()));
        }
        self.active = name.to_string();
        self.playback.rewind();
        Ok(())
    }

    /// Feeds elapsed seconds into the fixed-step cursor advance.
    pub fn update(&mut self, delta_seconds: f32) {
        let frames = &self.animations[&self.active];
        self.playback.accumulate(delta_seconds, frames);
    }

    pub fn frame_index(&self) -> usize {
        self.playback.frame_index()
    }

    pub fn overflow(&self) -> f32 {
        self.playback.overflow()
    }

    /// The sheet cell the cursor currently points at.
    pub fn current_frame(&self) -> FrameCell {
        // In bounds by invariant: the cursor never leaves [0, len).
        self.active_frames().frames()[self.playback.frame_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_and_idle() -> Animator {
        let mut animations = IndexMap::new();
        animations.insert(
            "idle".to_string(),
            FrameSet::new(vec![FrameCell::new(0, 0), FrameCell::new(0, 1)], true, 5).unwrap(),
        );
        animations.insert(
            "walk".to_string(),
            FrameSet::new(
                vec![
                    FrameCell::new(1, 0),
                    FrameCell::new(1, 1),
                    FrameCell::new(1, 2),
                ],
                true,
                10,
            )
            .unwrap(),
        );
        Animator::new(animations).unwrap()
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = Animator::new(IndexMap::new()).unwrap_err();
        assert_eq!(err, AnimationError::NoAnimations);
    }

    #[test]
    fn first_inserted_clip_is_active() {
        let animator = walk_and_idle();
        assert_eq!(animator.active_name(), "idle");
        assert_eq!(animator.current_frame(), FrameCell::new(0, 0));
    }

    #[test]
    fn unknown_clip_name_is_rejected() {
        let mut animator = walk_and_idle();
        let err = animator.set_active("run").unwrap_err();
        assert_eq!(err, AnimationError::MissingAnimation("run".to_string()));
        // Active clip is untouched on failure.
        assert_eq!(animator.active_name(), "idle");
    }

    #[test]
    fn switching_clips_rewinds_cursor_but_keeps_overflow() {
        let mut animator = walk_and_idle();
        animator.update(0.25); // idle at 5 fps: one advance + 0.05 left
        assert_eq!(animator.frame_index(), 1);
        let overflow = animator.overflow();
        assert!(overflow > 0.0);

        animator.set_active("walk").unwrap();
        assert_eq!(animator.frame_index(), 0);
        assert_eq!(animator.overflow(), overflow);
        assert_eq!(animator.current_frame(), FrameCell::new(1, 0));
    }

    #[test]
    fn update_advances_active_clip_only() {
        let mut animator = walk_and_idle();
        animator.set_active("walk").unwrap();
        animator.update(0.35); // 10 fps: 3 advances over 3 frames -> wraps to 0
        assert_eq!(animator.frame_index(), 0);
        assert!((animator.overflow() - 0.05).abs() < 1e-3);
    }
}
