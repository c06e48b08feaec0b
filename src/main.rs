//! Flappy Board entry point
//!
//! Web: name screen, fixed-rate game loop, leaderboard list.
//! Native: a headless autopilot run against an in-process leaderboard.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement};

    use flappy_board::Settings;
    use flappy_board::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use flappy_board::leaderboard::{HttpClient, RankedRun, ReportQueue, RunReport, drain};
    use flappy_board::renderer::{CanvasRenderer, compose};
    use flappy_board::sim::{GameEvent, GameState, TickInput, tick};
    use flappy_board::ui;

    /// Game instance holding all per-session state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        player: String,
    }

    impl Game {
        /// Simulate and draw one frame, returning engine events
        fn frame(&mut self, now: f64) -> Vec<GameEvent> {
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input, now);
            if let Err(e) = self.renderer.draw(&compose(&self.state, &self.player)) {
                log::warn!("Render error: {:?}", e);
            }
            self.state.drain_events()
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn element(id: &str) -> Option<HtmlElement> {
        document()?.get_element_by_id(id)?.dyn_into().ok()
    }

    fn set_display(id: &str, value: &str) {
        if let Some(el) = element(id) {
            let _ = el.style().set_property("display", value);
        }
    }

    fn show_name_error(message: &str) {
        if let Some(el) = element("nameError") {
            el.set_text_content(Some(message));
        }
        set_display("nameError", "block");
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Board starting...");

        let settings = Settings::load();
        let client = Rc::new(HttpClient::new(&settings.backend_url));

        if let (Some(name), Some(input)) = (
            settings.last_player_name.as_deref(),
            element("playerName").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
        ) {
            input.set_value(name);
        }

        setup_start_button(settings, client);
    }

    fn setup_start_button(settings: Settings, client: Rc<HttpClient>) {
        let Some(btn) = element("startGameBtn") else {
            log::error!("No start button");
            return;
        };

        // Set once a name is accepted so double clicks cannot start two games
        let started = Rc::new(RefCell::new(false));
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            if *started.borrow() {
                return;
            }
            let raw = element("playerName")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();

            let client = client.clone();
            let started = started.clone();
            let mut settings = settings.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ui::claim_name(client.as_ref(), &raw).await {
                    Err(e) => show_name_error(&e.to_string()),
                    Ok(name) => {
                        if started.replace(true) {
                            return;
                        }
                        set_display("nameError", "none");
                        set_display("nameScreen", "none");
                        set_display("myCanvas", "block");

                        settings.last_player_name = Some(name.clone());
                        settings.save();

                        if let Err(e) = start_game(name, &settings, client) {
                            log::error!("Failed to start game: {:?}", e);
                        }
                    }
                }
            });
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_game(
        player: String,
        settings: &Settings,
        client: Rc<HttpClient>,
    ) -> Result<(), JsValue> {
        log::info!("Starting game for: {}", player);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let canvas: HtmlCanvasElement = element("myCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(settings.tuning.clone()),
            renderer: CanvasRenderer::new(&canvas, settings)?,
            input: TickInput::default(),
            player,
        }));
        let queue = Rc::new(RefCell::new(ReportQueue::new()));

        setup_input_handlers(&window, game.clone());

        // Fixed-rate frame timer
        let closure = Closure::<dyn FnMut()>::new(move || {
            let events = game.borrow_mut().frame(js_sys::Date::now());
            for event in events {
                if let GameEvent::RunEnded { run_id, score } = event {
                    let report = RunReport {
                        run_id,
                        name: game.borrow().player.clone(),
                        score,
                    };
                    if queue.borrow_mut().enqueue(report) {
                        spawn_drain(client.clone(), queue.clone());
                    }
                }
            }
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            settings.tuning.frame_interval_ms(),
        )?;
        closure.forget();

        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        for event_name in ["keydown", "mousedown", "touchstart"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                game.borrow_mut().input.jump = true;
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn spawn_drain(client: Rc<HttpClient>, queue: Rc<RefCell<ReportQueue>>) {
        wasm_bindgen_futures::spawn_local(async move {
            drain(client.as_ref(), &queue, |ranked| show_leaderboard(&ranked)).await;
        });
    }

    fn show_leaderboard(ranked: &RankedRun) {
        let Some(document) = document() else {
            return;
        };
        set_display("leaderboard", "block");

        if let Some(list) = document.get_element_by_id("scoresList") {
            list.set_inner_html("");
            for row in ui::rows(&ranked.entries, &ranked.report.name, ranked.report.score) {
                let Ok(li) = document.create_element("li") else {
                    continue;
                };
                li.set_text_content(Some(&row.text));
                if row.highlight {
                    let _ = li.set_attribute("style", "font-weight: bold; color: blue;");
                }
                let _ = list.append_child(&li);
            }
        }

        if let (Some(el), Some(best)) = (
            document.get_element_by_id("personalBest"),
            ui::personal_best(&ranked.entries, &ranked.report.name),
        ) {
            el.set_text_content(Some(&best));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::cell::RefCell;

    use flappy_board::Settings;
    use flappy_board::consts::FIELD_HEIGHT;
    use flappy_board::leaderboard::{
        LocalClient, MemoryStore, RankedRun, ReportQueue, RunReport, drain,
    };
    use flappy_board::sim::{GameEvent, GamePhase, GameState, SpriteKind, TickInput, tick};
    use flappy_board::ui;

    /// Runs to play before stopping
    const RUNS: u32 = 3;
    /// Safety cap (about eight minutes of game time at 40 FPS)
    const MAX_FRAMES: u64 = 20_000;

    /// Flap when the bird sinks below the next gap's lower part
    fn autopilot(state: &GameState) -> bool {
        if state.phase != GamePhase::Running {
            return true;
        }
        let bird = &state.bird;
        let target = state
            .pipes
            .iter()
            .find(|p| p.kind == SpriteKind::PipeBottom && p.pos.x + p.size.x > bird.pos.x)
            .map(|p| p.pos.y - 30.0)
            .unwrap_or(FIELD_HEIGHT / 2.0);
        bird.vel.y >= 0.0 && bird.pos.y + bird.size.y > target
    }

    fn print_board(ranked: &RankedRun) {
        log::info!("Leaderboard after run {}:", ranked.report.run_id);
        for row in ui::rows(&ranked.entries, &ranked.report.name, ranked.report.score) {
            let marker = if row.highlight { " <-" } else { "" };
            log::info!("  {}{}", row.text, marker);
        }
        if let Some(best) = ui::personal_best(&ranked.entries, &ranked.report.name) {
            log::info!("  {}", best);
        }
    }

    pub fn run() {
        let settings = Settings::load();
        let client = LocalClient::new(MemoryStore::new());
        let name = match pollster::block_on(ui::claim_name(&client, "autopilot")) {
            Ok(name) => name,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };

        let queue = RefCell::new(ReportQueue::new());
        let mut state = GameState::new(settings.tuning.clone());
        let frame_ms = settings.tuning.frame_interval_ms() as f64;

        let mut runs = 0;
        let mut frame = 0u64;
        while runs < RUNS && frame < MAX_FRAMES {
            let now = frame as f64 * frame_ms;
            let input = TickInput {
                jump: autopilot(&state),
            };
            tick(&mut state, &input, now);

            for event in state.drain_events() {
                if let GameEvent::RunEnded { run_id, score } = event {
                    runs += 1;
                    log::info!("Run {} over at frame {}: score {}", run_id, frame, score);
                    let report = RunReport {
                        run_id,
                        name: name.clone(),
                        score,
                    };
                    if queue.borrow_mut().enqueue(report) {
                        pollster::block_on(drain(&client, &queue, |ranked| print_board(&ranked)));
                    }
                }
            }
            frame += 1;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Board (native) starting...");
    log::info!("Native mode plays a headless demo - run with `trunk serve` for the web version");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
