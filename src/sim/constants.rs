// Shared tuning constants for the orb and strand simulation.
// Everything here is platform-free; the browser glue only reads it.

// Orb energy
pub const ENERGY_GROW_RATE: f64 = 0.02; // per frame while the pointer is down
pub const ENERGY_DECAY_RATE: f64 = 0.015; // per frame otherwise

// Orb sizing, as fractions of min(width, height)
pub const ORB_BASE_RADIUS_FRACTION: f64 = 0.18; // calm size
pub const ORB_MAX_RADIUS_FRACTION: f64 = 0.32; // fully charged size

// Orb layers
pub const BEAM_CORE_ALPHA_BASE: f64 = 0.18;
pub const BEAM_CORE_ALPHA_SPAN: f64 = 0.25;
pub const BEAM_HALF_WIDTH_FACTOR: f64 = 0.6; // beam half-width relative to orb radius
pub const GLOW_OUTER_ALPHA_BASE: f64 = 0.02;
pub const GLOW_OUTER_ALPHA_SPAN: f64 = 0.3;
pub const RING_RADIUS_FACTOR: f64 = 0.9;
pub const RING_ALPHA_BASE: f64 = 0.4;
pub const RING_ALPHA_SPAN: f64 = 0.4;
pub const RING_LINE_WIDTH: f64 = 2.0;

// Strand creation
pub const STRAND_SPEED_CAP: f64 = 60.0;
pub const STRAND_VELOCITY_SCALE: f64 = 0.15;
pub const STRAND_MAX_LIFE_MIN: f64 = 80.0;
pub const STRAND_MAX_LIFE_MAX: f64 = 120.0; // exclusive
pub const STRAND_THICKNESS_MIN: f64 = 1.5;
pub const STRAND_THICKNESS_MAX: f64 = 4.0; // exclusive

// Strand motion and fade
pub const STRAND_DAMPING: f64 = 0.9; // applied to velocity when integrating
pub const STRAND_UPWARD_DRIFT: f64 = 0.05; // subtracted from y every frame
pub const STRAND_TAIL_FACTOR: f64 = 0.5; // tail length along the velocity
pub const STRAND_ALPHA_PEAK: f64 = 0.35;
pub const STRAND_THINNING: f64 = 0.7; // fraction of thickness lost by end of life

// Palette (r, g, b)
pub const STRAND_COLOR_YOUNG: [u8; 3] = [150, 255, 220]; // teal
pub const STRAND_COLOR_OLD: [u8; 3] = [230, 255, 240]; // near-white
pub const BEAM_COLOR: [u8; 3] = [170, 255, 230];
pub const GLOW_CORE_COLOR: [u8; 3] = [255, 255, 255];
pub const GLOW_INNER_COLOR: [u8; 3] = [200, 255, 235];
pub const GLOW_MID_COLOR: [u8; 3] = [120, 240, 210];
pub const GLOW_OUTER_COLOR: [u8; 3] = [40, 160, 150];
pub const RING_COLOR: [u8; 3] = [210, 255, 240];
pub const BACKGROUND_TOP: [u8; 3] = [4, 10, 28]; // dark navy
pub const BACKGROUND_BOTTOM: [u8; 3] = [0, 1, 6]; // near-black
