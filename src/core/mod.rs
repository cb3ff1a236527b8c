//! Platform-free simulation state behind the visual effects.
//!
//! Nothing in here touches `web_sys`; host-side tests include these modules
//! directly, so the whole simulation layer runs under plain `cargo test`.

pub mod grid;
pub mod marquee;
pub mod particles;
pub mod scaling;
pub mod trail;
pub mod typing;

pub use grid::*;
pub use marquee::*;
pub use particles::*;
pub use scaling::*;
pub use trail::*;
pub use typing::*;
