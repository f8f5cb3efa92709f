//! Model-view / projection matrix stack for hierarchical transforms.
//!
//! Each side is a grow-only arena of slots plus a cursor. Popping only moves
//! the cursor back: the vacated slot keeps its contents and is picked up again
//! by the next push to that depth. What that push does with the leftover
//! contents is governed by [`SlotReuse`].

use log::trace;

use crate::matrix::Mat4;

/// What a push does when the target depth already has a slot from an earlier
/// push/pop cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotReuse {
    /// Keep whatever was last written at that depth.
    #[default]
    Retain,
    /// Overwrite the slot with a copy of the parent, so every push starts
    /// from its parent's transform.
    CopyParent,
}

#[derive(Debug, Clone)]
struct SlotStack {
    slots: Vec<Mat4>,
    cursor: usize,
}

impl SlotStack {
    fn new() -> Self {
        Self {
            slots: vec![Mat4::IDENTITY],
            cursor: 0,
        }
    }

    fn push(&mut self, reuse: SlotReuse, side: &'static str) {
        let parent = self.slots[self.cursor];
        self.cursor += 1;

        if self.cursor == self.slots.len() {
            self.slots.push(parent);
            trace!("{side}: allocated slot {}", self.cursor);
            return;
        }

        match reuse {
            SlotReuse::Retain => trace!("{side}: reusing retained slot {}", self.cursor),
            SlotReuse::CopyParent => {
                self.slots[self.cursor] = parent;
                trace!("{side}: slot {} reset to parent", self.cursor);
            }
        }
    }

    fn pop(&mut self, side: &'static str) {
        if self.cursor == 0 {
            trace!("{side}: pop at depth 0 ignored");
            return;
        }
        self.cursor -= 1;
    }

    /// Overwrites the top slot with its parent. No-op at depth 0.
    fn reseed_from_parent(&mut self) {
        if let Some(parent) = self.cursor.checked_sub(1) {
            self.slots[self.cursor] = self.slots[parent];
        }
    }

    #[inline]
    fn top(&self) -> &Mat4 {
        &self.slots[self.cursor]
    }

    #[inline]
    fn top_mut(&mut self) -> &mut Mat4 {
        &mut self.slots[self.cursor]
    }
}

/// Paired model-view and projection stacks with independent cursors.
///
/// Both start at depth 0 holding the identity.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    model_view: SlotStack,
    projection: SlotStack,
    reuse: SlotReuse,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    pub fn new() -> Self {
        Self::with_reuse(SlotReuse::default())
    }

    pub fn with_reuse(reuse: SlotReuse) -> Self {
        Self {
            model_view: SlotStack::new(),
            projection: SlotStack::new(),
            reuse,
        }
    }

    #[inline]
    pub fn reuse(&self) -> SlotReuse {
        self.reuse
    }

    // ── model-view ────────────────────────────────────────────────────────

    pub fn push_model_view(&mut self) {
        self.model_view.push(self.reuse, "model-view");
    }

    /// Moves back one level. Never goes below depth 0 and never clears the
    /// vacated slot.
    pub fn pop_model_view(&mut self) {
        self.model_view.pop("model-view");
    }

    #[inline]
    pub fn model_view(&self) -> &Mat4 {
        self.model_view.top()
    }

    #[inline]
    pub fn model_view_mut(&mut self) -> &mut Mat4 {
        self.model_view.top_mut()
    }

    #[inline]
    pub fn model_view_depth(&self) -> usize {
        self.model_view.cursor
    }

    /// Runs `f` one model-view level deeper and pops afterwards.
    ///
    /// The scoped level always starts as a copy of its parent, whatever the
    /// stack's [`SlotReuse`] policy, so consecutive calls do not see each
    /// other's writes. Use [`push_model_view`](Self::push_model_view) directly
    /// to get the retained contents.
    pub fn with_model_view<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_model_view();
        self.model_view.reseed_from_parent();
        let out = f(self);
        self.pop_model_view();
        out
    }

    // ── projection ────────────────────────────────────────────────────────

    pub fn push_projection(&mut self) {
        self.projection.push(self.reuse, "projection");
    }

    pub fn pop_projection(&mut self) {
        self.projection.pop("projection");
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        self.projection.top()
    }

    #[inline]
    pub fn projection_mut(&mut self) -> &mut Mat4 {
        self.projection.top_mut()
    }

    #[inline]
    pub fn projection_depth(&self) -> usize {
        self.projection.cursor
    }

    // ── both ──────────────────────────────────────────────────────────────

    /// `(model_view, projection)` at the current depths.
    #[inline]
    pub fn current(&self) -> (&Mat4, &Mat4) {
        (self.model_view.top(), self.projection.top())
    }

    /// Slots ever allocated, as `(model_view, projection)`.
    #[inline]
    pub fn allocated_slots(&self) -> (usize, usize) {
        (self.model_view.slots.len(), self.projection.slots.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vec3, Vec4};

    fn revisit_depth_one(reuse: SlotReuse) -> MatrixStack {
        let mut s = MatrixStack::with_reuse(reuse);
        assert_eq!(*s.model_view(), Mat4::IDENTITY);

        s.push_model_view();
        assert_eq!(s.model_view_depth(), 1);
        assert_eq!(*s.model_view(), Mat4::IDENTITY);

        s.model_view_mut().translate_in_place(Vec3::new(1.0, 0.0, 0.0));
        s.pop_model_view();
        assert_eq!(s.model_view_depth(), 0);
        assert_eq!(*s.model_view(), Mat4::IDENTITY);

        s.push_model_view();
        s
    }

    #[test]
    fn retained_slot_keeps_last_write() {
        let s = revisit_depth_one(SlotReuse::Retain);
        assert_eq!(s.model_view().col(3), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(s.allocated_slots(), (2, 1));
    }

    #[test]
    fn copy_parent_resets_slot() {
        let s = revisit_depth_one(SlotReuse::CopyParent);
        assert_eq!(*s.model_view(), Mat4::IDENTITY);
        assert_eq!(s.allocated_slots(), (2, 1));
    }

    #[test]
    fn new_depth_copies_parent() {
        let mut s = MatrixStack::new();
        s.model_view_mut().scale_in_place(Vec3::new(2.0, 2.0, 2.0));
        s.push_model_view();
        s.model_view_mut().translate_in_place(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(s.model_view().col(3), Vec4::new(2.0, 0.0, 0.0, 1.0));
        s.pop_model_view();
        assert_eq!(s.model_view().col(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn pop_floors_at_zero() {
        let mut s = MatrixStack::new();
        s.pop_model_view();
        s.pop_projection();
        assert_eq!((s.model_view_depth(), s.projection_depth()), (0, 0));
        assert_eq!(s.current(), (&Mat4::IDENTITY, &Mat4::IDENTITY));
    }

    #[test]
    fn projection_push_leaves_model_view_alone() {
        let mut s = MatrixStack::new();
        s.push_projection();
        *s.projection_mut() = Mat4::ortho(0.0, 10.0, 10.0, 0.0, -1.0, 1.0);
        assert_eq!(s.model_view_depth(), 0);
        assert_eq!(s.projection_depth(), 1);
        s.pop_projection();
        assert_eq!(*s.projection(), Mat4::IDENTITY);
    }

    #[test]
    fn scoped_push_restores_depth() {
        let mut s = MatrixStack::new();
        let depth = s.with_model_view(|s| {
            s.model_view_mut().rotate_z_in_place(1.0);
            s.with_model_view(|s| s.model_view_depth())
        });
        assert_eq!(depth, 2);
        assert_eq!(s.model_view_depth(), 0);
        assert_eq!(s.allocated_slots(), (3, 1));
    }

    #[test]
    fn consecutive_scoped_pushes_start_from_parent() {
        let mut s = MatrixStack::new();
        s.model_view_mut().translate_in_place(Vec3::new(10.0, 0.0, 0.0));

        let first = s.with_model_view(|s| {
            s.model_view_mut()
                .multiply_matrix_assign(&Mat4::from_translation(Vec3::new(1.0, 2.0, 0.0)));
            s.model_view().col(3)
        });
        let second = s.with_model_view(|s| {
            s.model_view_mut()
                .multiply_matrix_assign(&Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));
            s.model_view().col(3)
        });

        assert_eq!(first, Vec4::new(11.0, 2.0, 0.0, 1.0));
        assert_eq!(second, Vec4::new(15.0, 0.0, 0.0, 1.0));
        assert_eq!(s.reuse(), SlotReuse::Retain);
        assert_eq!(s.allocated_slots(), (2, 1));

        // A plain push at the same depth still sees the last scoped write.
        s.push_model_view();
        assert_eq!(s.model_view().col(3), Vec4::new(15.0, 0.0, 0.0, 1.0));
    }
}
