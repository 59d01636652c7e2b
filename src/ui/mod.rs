//! Widget tree, widgets and the terminal host that displays them

pub mod app;
pub mod components;
pub mod core;
pub mod events;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use events::handle_key;
pub use layout::LayoutManager;
pub use renderer::run_app;
