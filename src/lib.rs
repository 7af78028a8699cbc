pub mod content;
pub mod counter;
pub mod cursor;
pub mod navigation;
pub mod page;
pub mod particles;
pub mod timeline;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
