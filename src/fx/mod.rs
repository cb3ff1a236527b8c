//! Effect components: each owns its drawing surface or target elements, its
//! frame loop, and its listeners, and releases all of them on drop.

pub mod float;
pub mod grid;
pub mod marquee;
pub mod particles;
pub mod trail;
pub mod typing;

pub use float::FloatEffect;
pub use grid::GridBackdrop;
pub use marquee::Marquee;
pub use particles::ParticleBackdrop;
pub use trail::CursorTrail;
pub use typing::Typing;
