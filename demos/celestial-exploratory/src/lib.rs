use wasm_bindgen::prelude::*;
use celestial_engine::*;

pub mod bodies;
pub mod game;
pub mod interaction;
pub mod orbit;
pub mod speech;
pub mod trail;
use game::CelestialExploratory;

celestial_web::export_game!(CelestialExploratory, "celestial-exploratory");
