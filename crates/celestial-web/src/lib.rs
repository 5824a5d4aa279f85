pub mod runner;

pub use runner::{GameRunner, WebHost};

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use celestial_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// celestial_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `celestial_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        /// Build the game and register its assets. Throws if startup fails;
        /// the page must not start the animation loop in that case.
        #[wasm_bindgen]
        pub fn game_init() -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            if let Err(err) = runner.init() {
                log::error!("{}: startup failed: {}", $game_name, err);
                return Err(JsValue::from_str(&err.to_string()));
            }

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        /// The page is closing; the next tick runs the final frame and shuts down.
        #[wasm_bindgen]
        pub fn game_quit() {
            with_runner(|r| r.push_input(InputEvent::Quit));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32, button: u32) {
            let button = PointerButton::from_index(button);
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32, button: u32) {
            let button = PointerButton::from_index(button);
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn get_asset_manifest() -> String {
            with_runner(|r| r.manifest_json())
        }

        /// Descriptive text emitted since the last call, oldest first.
        #[wasm_bindgen]
        pub fn take_messages() -> js_sys::Array {
            with_runner(|r| {
                r.take_messages()
                    .into_iter()
                    .map(|text| JsValue::from_str(&text))
                    .collect::<js_sys::Array>()
            })
        }

        #[wasm_bindgen]
        pub fn is_finished() -> bool {
            with_runner(|r| r.is_finished())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vector_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertex_count() -> u32 {
            with_runner(|r| r.vector_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_draw_order() -> Vec<u32> {
            with_runner(|r| r.draw_order())
        }

        #[wasm_bindgen]
        pub fn get_sound_commands_ptr() -> *const f32 {
            with_runner(|r| r.sound_commands_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_count() -> u32 {
            with_runner(|r| r.sound_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_vector_vertices() -> u32 {
            with_runner(|r| r.max_vector_vertices())
        }

        #[wasm_bindgen]
        pub fn get_max_sounds() -> u32 {
            with_runner(|r| r.max_sounds())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
