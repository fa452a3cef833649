use rand::rngs::StdRng;
use squarechase_engine::coords::Rect;
use squarechase_engine::input::InputEvent;
use squarechase_engine::paint::Color;
use squarechase_engine::render::{Batcher, Vertex};
use squarechase_engine::view::{Requests, View};

use crate::chase::Chase;
use crate::context::{Context, ViewId};

const BACKGROUND: Color = Color::rgb(0x99, 0xBB, 0xFF);

/// Two triangles over [`Rect::UNIT_CORNERS`].
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 1, 3, 2];

/// The playing screen.
pub struct GameView {
    chase: Chase,
    rng: StdRng,
}

impl GameView {
    pub fn new(rng: StdRng) -> Self {
        Self {
            chase: Chase::new(),
            rng,
        }
    }
}

impl View<ViewId, Context> for GameView {
    fn update(&mut self, cx: &mut Context, _requests: &mut Requests<ViewId>, dt: f32) -> bool {
        self.chase
            .update(&mut self.rng, cx.window_size, cx.press(), dt);
        cx.title = self.chase.title();
        true
    }

    fn handle_event(&mut self, _cx: &mut Context, _: &mut Requests<ViewId>, _: &InputEvent) -> bool {
        false
    }

    fn render(&self, cx: &Context, batch: &mut Batcher) {
        batch.clear(BACKGROUND);

        let square = self.chase.square();
        let color = self.chase.color();

        batch.select_texture(Some(cx.square_texture));
        let base = batch.reserve(QUAD_INDICES.len() as u32, 4);
        batch.append_indices(base, QUAD_INDICES);

        let corners = square.corners();
        for ((v, pos), uv) in batch
            .vertex_array(4)
            .iter_mut()
            .zip(corners)
            .zip(Rect::UNIT_CORNERS)
        {
            *v = Vertex::new(pos, uv, color);
        }
    }
}
