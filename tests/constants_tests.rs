// Host-side tests for constants and their mathematical relationships.
mod common;

use common::sim::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_are_positive_and_small() {
    assert!(ENERGY_GROW_RATE > 0.0 && ENERGY_GROW_RATE < 1.0);
    assert!(ENERGY_DECAY_RATE > 0.0 && ENERGY_DECAY_RATE < 1.0);
    // Charging is quicker than draining.
    assert!(ENERGY_GROW_RATE > ENERGY_DECAY_RATE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orb_sizes_are_ordered() {
    assert!(ORB_BASE_RADIUS_FRACTION > 0.0);
    assert!(ORB_MAX_RADIUS_FRACTION > ORB_BASE_RADIUS_FRACTION);
    // A fully charged orb still fits on the surface.
    assert!(ORB_MAX_RADIUS_FRACTION < 0.5);
    assert!(RING_RADIUS_FACTOR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphas_stay_in_unit_range_at_full_energy() {
    assert!(BEAM_CORE_ALPHA_BASE + BEAM_CORE_ALPHA_SPAN <= 1.0);
    assert!(GLOW_OUTER_ALPHA_BASE + GLOW_OUTER_ALPHA_SPAN <= 1.0);
    assert!(RING_ALPHA_BASE + RING_ALPHA_SPAN <= 1.0);
    assert!(STRAND_ALPHA_PEAK <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn strand_ranges_are_well_formed() {
    assert!(STRAND_MAX_LIFE_MIN < STRAND_MAX_LIFE_MAX);
    assert!(STRAND_THICKNESS_MIN > 0.0);
    assert!(STRAND_THICKNESS_MIN < STRAND_THICKNESS_MAX);
    assert!(STRAND_THINNING < 1.0);
    assert!(STRAND_SPEED_CAP * STRAND_VELOCITY_SCALE == 9.0);
}

#[test]
fn defaults_mirror_constants() {
    let p = GlowParams::default();
    assert_eq!(p.orb.grow_rate, ENERGY_GROW_RATE);
    assert_eq!(p.orb.decay_rate, ENERGY_DECAY_RATE);
    assert_eq!(p.strands.max_life, STRAND_MAX_LIFE_MIN..STRAND_MAX_LIFE_MAX);
    assert_eq!(p.strands.thickness, STRAND_THICKNESS_MIN..STRAND_THICKNESS_MAX);
    assert_eq!(p.strands.max_strands, None);
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(Rgba::new(150, 255, 220, 0.35).to_string(), "rgba(150, 255, 220, 0.350)");
    assert_eq!(Rgba::new(0, 0, 0, 1.7).to_string(), "rgba(0, 0, 0, 1.000)");
}
