use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use squarechase_engine::coords::Vec2;
use squarechase_engine::core::{App, AppControl, FrameCtx};
use squarechase_engine::input::{InputEvent, Key, MouseButton};
use squarechase_engine::render::SpriteRenderer;
use squarechase_engine::time::FixedStep;
use squarechase_engine::view::ViewStack;

use crate::assets::load_square_texture;
use crate::config::GameConfig;
use crate::context::{Context, ViewId};
use crate::game_view::GameView;

/// Drives the view stack: fixed-rate updates, one render per frame.
pub struct SquareChase {
    config: GameConfig,
    views: ViewStack<ViewId, Context>,
    cx: Context,
    step: FixedStep,
    /// Input not yet seen by a fixed update.
    pending: VecDeque<InputEvent>,
    /// Created on the first frame, when a device exists.
    renderer: Option<SpriteRenderer>,
}

impl SquareChase {
    pub fn new(config: GameConfig) -> Self {
        let mut views = ViewStack::new();
        let seed = config.seed;
        views.register(ViewId::Game, move |_cx: &mut Context| {
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Box::new(GameView::new(rng))
        });

        let size = config.window.initial_size;
        let mut cx = Context::new(Vec2::new(size.width as f32, size.height as f32));

        views.push(ViewId::Game);
        views.apply_pending(&mut cx);

        Self {
            step: FixedStep::new(config.update_rate, config.max_steps_per_frame),
            config,
            views,
            cx,
            pending: VecDeque::new(),
            renderer: None,
        }
    }

    /// Runs `steps` fixed updates, feeding queued input to the views first.
    fn run_steps(&mut self, steps: u32) -> AppControl {
        let dt = self.step.step_secs();
        for _ in 0..steps {
            if self.process_input() == AppControl::Exit {
                return AppControl::Exit;
            }
            self.views.update(&mut self.cx, dt);
        }

        if self.views.is_empty() {
            log::info!("no views left; exiting");
            return AppControl::Exit;
        }
        AppControl::Continue
    }

    fn process_input(&mut self) -> AppControl {
        while let Some(event) = self.pending.pop_front() {
            if self.views.handle_event(&mut self.cx, &event) {
                continue;
            }
            if event.is_key_press(Key::Escape) {
                log::info!("escape pressed; exiting");
                return AppControl::Exit;
            }
        }
        AppControl::Continue
    }
}

impl App for SquareChase {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.pending.extend(ctx.input_frame.events.iter().copied());

        self.cx.window_size = ctx.window.logical_size();
        self.cx.pointer = ctx.input.pointer_pos;
        self.cx.primary_down = ctx.input.button_down(MouseButton::Left);

        let steps = self.step.advance(ctx.time.elapsed);
        if self.run_steps(steps) == AppControl::Exit {
            return AppControl::Exit;
        }

        if !self.cx.title.is_empty() {
            ctx.runtime.set_title(self.cx.title.clone());
        }

        let (renderer, views, cx, config) =
            (&mut self.renderer, &self.views, &mut self.cx, &self.config);

        ctx.render(|rctx, target| {
            let renderer = renderer.get_or_insert_with(|| {
                let mut renderer = SpriteRenderer::new(rctx);
                cx.square_texture = load_square_texture(&mut renderer, rctx, &config.square_texture);
                renderer
            });

            views.render(cx, renderer.batch_mut());
            renderer.draw(rctx, target);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squarechase_engine::input::ButtonState;

    fn game() -> SquareChase {
        SquareChase::new(GameConfig {
            seed: Some(3),
            ..Default::default()
        })
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key { key, state: ButtonState::Pressed, repeat: false }
    }

    #[test]
    fn starts_with_the_game_view() {
        let g = game();
        assert_eq!(g.views.len(), 1);
        assert_eq!(g.cx.window_size, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn updates_set_the_title() {
        let mut g = game();
        assert_eq!(g.run_steps(2), AppControl::Continue);
        assert_eq!(g.cx.title, "Score: 0");
    }

    #[test]
    fn escape_exits() {
        let mut g = game();
        g.pending.push_back(key(Key::Space));
        g.pending.push_back(key(Key::Escape));
        assert_eq!(g.run_steps(1), AppControl::Exit);
    }

    #[test]
    fn input_waits_for_the_next_update() {
        let mut g = game();
        g.pending.push_back(key(Key::Escape));
        assert_eq!(g.run_steps(0), AppControl::Continue);
        assert_eq!(g.pending.len(), 1);
    }
}
