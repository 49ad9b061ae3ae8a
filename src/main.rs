//! Drift Lane entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use drift_lane::persistence::LocalStorage;
    use drift_lane::platform::{InputEvent, apply_input, key_event};
    use drift_lane::renderer::{CanvasRenderer, RenderSink};
    use drift_lane::{GameSession, Settings};

    /// Game instance holding all state
    struct Game {
        session: GameSession<LocalStorage>,
        renderer: CanvasRenderer,
    }

    impl Game {
        /// Advance one frame and draw it
        fn frame(&mut self, time_ms: f64) {
            self.session.frame_millis(time_ms);
            let snapshot = self.session.snapshot();
            self.renderer.present(&snapshot);
        }

        fn input(&mut self, event: InputEvent) {
            apply_input(&mut self.session, event);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Drift Lane starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no canvas")?
            .dyn_into()?;

        let store = LocalStorage::new();
        let settings = Settings::load(&store);
        let seed = js_sys::Date::now() as u64;
        let renderer =
            CanvasRenderer::new(&canvas, settings, seed ^ 0x5eed).ok_or("no 2d context")?;
        let session = GameSession::new(store, seed);

        let game = Rc::new(RefCell::new(Game { session, renderer }));

        // Draw the idle screen before the first frame arrives
        {
            let mut g = game.borrow_mut();
            let snapshot = g.session.snapshot();
            g.renderer.present(&snapshot);
        }

        setup_input_handlers(&canvas, &window, game.clone())?;
        request_animation_frame(game);

        log::info!("Drift Lane running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse
        for (name, event) in [("mousedown", InputEvent::Press), ("mouseup", InputEvent::Release)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input(event);
            });
            canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch
        for (name, event) in [("touchstart", InputEvent::Press), ("touchend", InputEvent::Release)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |touch: TouchEvent| {
                touch.prevent_default();
                game.borrow_mut().input(event);
            });
            canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        for (name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |key: KeyboardEvent| {
                if let Some(event) = key_event(&key.code(), pressed) {
                    key.prevent_default();
                    game.borrow_mut().input(event);
                }
            });
            window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Lost the window - stopping");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use drift_lane::GameSession;
    use drift_lane::persistence::{FileStore, KeyValueStore, MemoryStore};
    use drift_lane::platform::{RealTimeFrames, run_frames};
    use drift_lane::renderer::HeadlessSink;
    use drift_lane::sim::Autopilot;

    env_logger::init();
    log::info!("Drift Lane (native) starting...");
    log::info!("Native mode runs the autopilot headless - build for wasm32 to play");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let dir = FileStore::default_dir();
    match FileStore::open(&dir) {
        Ok(store) => {
            log::info!("Storing records in {}", dir.display());
            demo(GameSession::new(store, seed));
        }
        Err(err) => {
            log::warn!("Cannot open {} ({}), records will not persist", dir.display(), err);
            demo(GameSession::new(MemoryStore::new(), seed));
        }
    }

    fn demo<S: KeyValueStore>(mut session: GameSession<S>) {
        let pilot = Autopilot::new(true);
        let mut sink = HeadlessSink::new();
        let frames = RealTimeFrames::new(60, Duration::from_secs(60));
        let summary = run_frames(&mut session, &mut sink, Some(&pilot), frames, Some(3));

        log::info!(
            "Peak particles {}, peak shake {:.2}",
            sink.peak_particles,
            sink.peak_shake
        );
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(err) => log::error!("Failed to encode summary: {}", err),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
