pub mod scene;
pub mod time;
pub mod frame_loop;
