// Host-side tests for the chase engine and heading resolution.

use glam::Vec2;
use mascot_core::constants::STOP_DISTANCE;
use mascot_core::*;

const FRAME_MS: f64 = 16.0;

fn mascot_in(width: f32, height: f32) -> Mascot {
    Mascot::new(MascotConfig::default(), Viewport::new(width, height), 42).unwrap()
}

#[test]
fn starts_near_bottom_right_and_settled() {
    let m = mascot_in(1000.0, 800.0);
    assert_eq!(m.position(), Vec2::new(870.0, 670.0));
    assert_eq!(m.direction(), Direction::South);
    assert_eq!(m.phase(), Phase::Idle);
}

#[test]
fn first_frame_moves_one_percent_toward_pointer() {
    let mut m = mascot_in(1000.0, 1000.0);
    m.set_position(Vec2::ZERO);
    m.pointer_moved(Vec2::new(500.0, 500.0));
    m.frame(0.0);

    // center (25,25) -> pointer: (475,475); 1% of that plus a sub-pixel wave
    let p = m.position();
    assert!((p.x - 4.75).abs() < 0.5, "x = {}", p.x);
    assert!((p.y - 4.75).abs() < 0.5, "y = {}", p.y);
    assert!(p.x > 0.0 && p.y > 0.0, "not clamped: {:?}", p);
}

#[test]
fn chase_converges_monotonically_under_fixed_target() {
    let mut m = mascot_in(1200.0, 900.0);
    m.set_position(Vec2::new(10.0, 20.0));
    let target = Vec2::new(900.0, 700.0);
    m.pointer_moved(target);

    let mut now = 0.0;
    let mut last = m.center().distance(target);
    while last >= STOP_DISTANCE {
        m.frame(now);
        now += FRAME_MS;
        let d = m.center().distance(target);
        assert!(d < last, "distance grew from {} to {} at {}ms", last, d, now);
        last = d;
        assert!(now < 60_000.0, "chase never settled");
    }
}

#[test]
fn settled_mascot_faces_south_until_pointer_leaves() {
    let mut m = mascot_in(1000.0, 1000.0);
    m.set_position(Vec2::new(400.0, 400.0));
    // center is (425,425); pointer 30px east is inside the deadband
    m.pointer_moved(Vec2::new(455.0, 425.0));
    assert_eq!(m.direction(), Direction::East);

    let before = m.position();
    for i in 0..10 {
        m.frame(i as f64 * FRAME_MS);
        assert_eq!(m.direction(), Direction::South);
        assert_eq!(m.position(), before);
    }

    m.pointer_moved(Vec2::new(425.0, 100.0));
    assert_eq!(m.direction(), Direction::North);
    m.frame(200.0);
    assert_eq!(m.direction(), Direction::North);
    assert_ne!(m.position(), before);
}

#[test]
fn heading_follows_dominant_axis() {
    let c = Vec2::new(100.0, 100.0);
    assert_eq!(Direction::toward(c, Vec2::new(200.0, 150.0)), Direction::East);
    assert_eq!(Direction::toward(c, Vec2::new(0.0, 150.0)), Direction::West);
    assert_eq!(Direction::toward(c, Vec2::new(120.0, 300.0)), Direction::South);
    assert_eq!(Direction::toward(c, Vec2::new(120.0, 0.0)), Direction::North);
    // ties resolve vertically
    assert_eq!(Direction::toward(c, Vec2::new(150.0, 150.0)), Direction::South);
}

#[test]
fn position_stays_inside_viewport() {
    let mut m = mascot_in(300.0, 200.0);
    m.pointer_moved(Vec2::new(-5000.0, 9000.0));
    for i in 0..2000 {
        m.frame(i as f64 * FRAME_MS);
        let p = m.position();
        assert!(p.x >= 0.0 && p.x <= 250.0, "x out of range: {}", p.x);
        assert!(p.y >= 0.0 && p.y <= 150.0, "y out of range: {}", p.y);
    }
}

#[test]
fn zero_viewport_does_not_panic() {
    let mut m = mascot_in(0.0, 0.0);
    m.pointer_moved(Vec2::new(300.0, 300.0));
    for i in 0..5 {
        m.frame(i as f64 * FRAME_MS);
    }
    assert_eq!(m.position(), Vec2::ZERO);
}

#[test]
fn resize_reclamps_position() {
    let mut m = mascot_in(1000.0, 1000.0);
    m.set_viewport(Viewport::new(400.0, 300.0));
    let p = m.position();
    assert!(p.x <= 350.0 && p.y <= 250.0, "{:?}", p);
}

#[test]
fn pointer_is_ignored_while_transitioning() {
    let mut m = mascot_in(1000.0, 1000.0);
    m.pointer_moved(Vec2::new(100.0, 500.0));
    let heading = m.direction();
    m.begin_transition("/vtubers", &NoProbe, 0.0).unwrap();

    m.pointer_moved(Vec2::new(999.0, 5.0));
    assert_eq!(m.target(), Vec2::new(100.0, 500.0));
    assert_eq!(m.direction(), heading);

    m.set_hovered(true);
    assert!(!m.hovered());
}

#[test]
fn resize_mid_transition_keeps_mascot_on_screen() {
    let mut m = mascot_in(1000.0, 1000.0);
    m.pointer_moved(Vec2::new(500.0, 500.0));
    m.begin_transition("/vtubers", &NoProbe, 0.0).unwrap();
    m.frame(0.0);
    assert_eq!(m.phase(), Phase::Moving);

    m.set_viewport(Viewport::new(300.0, 300.0));
    let mut now = FRAME_MS;
    let mut pending = None;
    while m.is_transitioning() {
        if let Some(ticket) = pending.take() {
            m.navigation_settled(ticket, Ok(()));
        }
        for cmd in m.frame(now) {
            if let Command::Navigate { ticket, .. } = cmd {
                pending = Some(ticket);
            }
        }
        let p = m.position();
        assert!(p.x <= 250.0 && p.y <= 250.0, "{:?} in {:?}", p, m.phase());
        if m.phase() != Phase::Moving {
            assert_eq!(p, Vec2::new(125.0, 125.0), "{:?}", m.phase());
        }
        now += FRAME_MS;
        assert!(now < 60_000.0, "transition never finished");
    }
    for _ in 0..100 {
        m.frame(now);
        now += FRAME_MS;
        let p = m.position();
        assert!(p.x <= 250.0 && p.y <= 250.0, "{:?}", p);
    }
}

