use squarechase_engine::coords::Vec2;
use squarechase_engine::render::TextureId;

/// Identifies the views the game can push.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ViewId {
    Game,
}

/// State shared with every view.
///
/// The app refreshes the input fields before each update and reads `title`
/// back afterwards.
#[derive(Debug, Clone)]
pub struct Context {
    /// Playfield size in logical px.
    pub window_size: Vec2,
    pub pointer: Option<Vec2>,
    pub primary_down: bool,
    pub square_texture: TextureId,
    pub title: String,
}

impl Context {
    pub fn new(window_size: Vec2) -> Self {
        Self {
            window_size,
            pointer: None,
            primary_down: false,
            square_texture: TextureId::WHITE,
            title: String::new(),
        }
    }

    /// Pointer position while the primary button is held.
    #[inline]
    pub fn press(&self) -> Option<Vec2> {
        self.pointer.filter(|_| self.primary_down)
    }
}
