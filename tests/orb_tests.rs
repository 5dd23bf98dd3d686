// Host-side tests for the orb's energy and drawing.
mod common;

use common::sim::*;
use common::{approx, Cmd, RecordingSurface};

fn orb() -> Orb {
    Orb::new(OrbParams::default(), 800.0, 600.0)
}

#[test]
fn energy_stays_in_unit_interval() {
    let mut o = orb();
    for round in 0..10 {
        let held = round % 2 == 0;
        for _ in 0..(37 + round * 23) {
            o.update(held);
            assert!((0.0..=1.0).contains(&o.energy()), "energy {}", o.energy());
        }
    }
}

#[test]
fn holding_down_charges_linearly() {
    for n in 0..=80 {
        let mut o = orb();
        for _ in 0..n {
            o.update(true);
        }
        let expected = (n as f64 * 0.02).min(1.0);
        assert!(approx(o.energy(), expected), "n={n} got {}", o.energy());
    }
}

#[test]
fn fifty_frames_of_hold_is_exactly_full() {
    let mut o = orb();
    for _ in 0..50 {
        o.update(true);
    }
    assert_eq!(o.energy(), 1.0);
    o.update(true);
    assert_eq!(o.energy(), 1.0);
}

#[test]
fn releasing_drains_linearly() {
    for n in 0..=80 {
        let mut o = orb();
        for _ in 0..50 {
            o.update(true);
        }
        for _ in 0..n {
            o.update(false);
        }
        let expected = (1.0 - n as f64 * 0.015).max(0.0);
        assert!(approx(o.energy(), expected), "n={n} got {}", o.energy());
    }
}

#[test]
fn resize_sets_radius_bounds_from_shorter_side() {
    let mut o = orb();
    o.on_resize(1024.0, 700.0);
    assert_eq!(o.base_radius(), 0.18 * 700.0);
    assert_eq!(o.max_radius(), 0.32 * 700.0);
    o.on_resize(390.0, 844.0);
    assert_eq!(o.base_radius(), 0.18 * 390.0);
    assert_eq!(o.max_radius(), 0.32 * 390.0);
    assert_eq!(o.center(), glam::DVec2::new(195.0, 422.0));
}

#[test]
fn radius_follows_energy_within_bounds() {
    let mut o = orb();
    assert_eq!(o.current_radius(), o.base_radius());
    for _ in 0..25 {
        o.update(true);
    }
    let mid = o.base_radius() + (o.max_radius() - o.base_radius()) * 0.5;
    assert!(approx(o.current_radius(), mid));
    for _ in 0..100 {
        o.update(true);
        assert!(o.current_radius() <= o.max_radius());
    }
    assert!(approx(o.current_radius(), o.max_radius()));
}

#[test]
fn draw_emits_beam_glow_ring_additively() {
    let mut o = orb();
    for _ in 0..25 {
        o.update(true);
    }
    let e = o.energy();
    let mut s = RecordingSurface::new(800.0, 600.0);
    o.draw(&mut s);

    assert_eq!(s.cmds.first(), Some(&Cmd::Save));
    assert_eq!(s.cmds.get(1), Some(&Cmd::Blend(Blend::Lighter)));
    assert_eq!(s.cmds.last(), Some(&Cmd::Restore));

    match &s.cmds[2] {
        Cmd::FillRect(rect, Paint::Linear(g)) => {
            assert_eq!(rect.y, 0.0);
            assert_eq!(rect.h, 600.0);
            assert!(approx(rect.x + rect.w * 0.5, 400.0));
            let peak = g.stops.iter().map(|st| st.color.a).fold(0.0, f64::max);
            assert!(approx(peak, 0.18 + 0.25 * e));
        }
        other => panic!("expected beam, got {other:?}"),
    }
    match &s.cmds[3] {
        Cmd::FillCircle(center, radius, Paint::Radial(g)) => {
            assert_eq!(*center, o.center());
            assert!(approx(*radius, o.current_radius()));
            assert_eq!(g.stops.len(), 4);
            let outer = g.stops.last().map(|st| st.color.a).unwrap_or_default();
            assert!(approx(outer, 0.02 + 0.3 * e));
        }
        other => panic!("expected glow, got {other:?}"),
    }
    match &s.cmds[4] {
        Cmd::StrokeCircle(_, radius, _, color) => {
            assert!(approx(*radius, 0.9 * o.current_radius()));
            assert!(approx(color.a, 0.4 + 0.4 * e));
        }
        other => panic!("expected ring, got {other:?}"),
    }
}
