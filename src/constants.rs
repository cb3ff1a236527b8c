// Element ids the engine mounts against; components whose elements are
// missing from the page are simply skipped.
pub const GRID_CANVAS_ID: &str = "grid-canvas";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const BURST_CANVAS_ID: &str = "burst-canvas";
pub const TRAIL_CANVAS_ID: &str = "trail-canvas";
pub const MARQUEE_SECTION_ID: &str = "marquee-section";
pub const MARQUEE_FORWARD_ID: &str = "marquee-forward";
pub const MARQUEE_REVERSE_ID: &str = "marquee-reverse";
pub const EMBED_ID: &str = "scene-embed";
pub const EMBED_FALLBACK_ID: &str = "scene-fallback";
pub const FLOAT_ID: &str = "hero-robot";
pub const TYPING_ID: &str = "typing-text";
pub const TYPING_CURSOR_ID: &str = "typing-cursor";

// Shared cyan-on-blueprint palette.
pub const BACKDROP_FILL: &str = "#0a0a12";
pub const GRID_LINE_COLOR: &str = "rgba(34, 211, 238, 0.3)";
pub const GRID_DOT_COLOR: &str = "rgba(34, 211, 238, 0.4)";
pub const GRID_DOT_RADIUS: f64 = 1.5;

pub const PARTICLE_FILL: &str = "rgba(34, 211, 238, 0.5)";
pub const PARTICLE_GLOW_COLOR: &str = "rgba(34, 211, 238, 0.45)";
pub const PARTICLE_GLOW_BLUR: f64 = 12.0;

pub const TRAIL_INNER_COLOR: &str = "rgba(34, 211, 238, 1)";
pub const TRAIL_OUTER_COLOR: &str = "rgba(59, 130, 246, 0)";

// Marquee bands: fraction of the band that must be on screen to count as
// in view, and the resting opacities for each state (in view, out of view).
pub const MARQUEE_VIEW_THRESHOLD: f64 = 0.3;
pub const MARQUEE_FORWARD_OPACITY: (f32, f32) = (0.3, 0.1);
pub const MARQUEE_REVERSE_OPACITY: (f32, f32) = (0.2, 0.05);
pub const MARQUEE_REVERSE_RATE: f32 = 0.5;
pub const MARQUEE_REVERSE_DRIFT: f32 = 1.2;

// Typing effect cadence, ms.
pub const TYPING_TICK_MS: i32 = 100;
pub const CURSOR_BLINK_MS: i32 = 500;

// Hero float motion.
pub const FLOAT_BOB_PX: f32 = 10.0;
pub const FLOAT_BOB_RATE: f32 = 2.0;
pub const FLOAT_TILT_DEG: f32 = 5.0;
pub const FLOAT_TILT_RATE: f32 = 1.0;
