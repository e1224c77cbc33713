use glam::Vec2;

/// Latest pointer sample, owned by [`PointerTracker`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Client-space pixels.
    pub raw: Vec2,
    /// -1..1 relative to viewport center.
    pub normalized: Vec2,
    pub is_over_interactive: bool,
}

/// Writes [`PointerState`]; everything else only reads it.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    viewport: Vec2,
    half_viewport: Vec2,
}

impl PointerTracker {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut t = Self {
            state: PointerState::default(),
            viewport: Vec2::ZERO,
            half_viewport: Vec2::ZERO,
        };
        t.resize(viewport_width, viewport_height);
        t
    }

    #[inline]
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
        self.half_viewport = self.viewport * 0.5;
    }

    /// Raw pointer-move: synchronous, unthrottled.
    pub fn on_move(&mut self, client_x: f32, client_y: f32) {
        self.state.raw = Vec2::new(client_x, client_y);
        self.state.normalized = normalize_to_center(self.state.raw, self.half_viewport);
    }

    /// Pin the pointer without a move event (cursor starts at viewport center).
    pub fn place(&mut self, pos: Vec2) {
        self.on_move(pos.x, pos.y);
    }

    pub fn set_over_interactive(&mut self, over: bool) {
        self.state.is_over_interactive = over;
    }

    /// Pointer position as a 0..1 fraction of the viewport.
    pub fn viewport_fraction(&self) -> Vec2 {
        viewport_fraction(self.state.raw, self.viewport)
    }
}

#[inline]
fn normalize_to_center(pos: Vec2, half: Vec2) -> Vec2 {
    let axis = |p: f32, h: f32| if h > 0.0 { (p - h) / h } else { 0.0 };
    Vec2::new(axis(pos.x, half.x), axis(pos.y, half.y))
}

#[inline]
pub fn viewport_fraction(pos: Vec2, viewport: Vec2) -> Vec2 {
    let axis = |p: f32, v: f32| if v > 0.0 { p / v } else { 0.5 };
    Vec2::new(axis(pos.x, viewport.x), axis(pos.y, viewport.y))
}
