pub mod actions;
pub mod cursor;
pub mod keyboard;
pub mod monitor;
pub mod navigation;
pub mod parallax;
pub mod reveal;
pub mod scroller;
pub mod toast;

pub use actions::Actions;
pub use cursor::CursorEffect;
pub use keyboard::{KeyIntent, KeyboardNav};
pub use monitor::PerfMonitor;
pub use navigation::{MenuState, Navigation};
pub use parallax::Parallax;
pub use reveal::Reveal;
pub use scroller::SmoothScroller;
pub use toast::Toast;
