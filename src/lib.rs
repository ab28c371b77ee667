pub mod content;
pub mod interact;
pub mod scene;
