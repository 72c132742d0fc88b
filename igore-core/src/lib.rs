//! igore-core: shared look, storage and logging for i-gore desktop tools

pub mod dither;
pub mod logging;
pub mod repaint;
pub mod safety;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::IgoreTheme;
