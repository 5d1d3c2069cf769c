use super::*;
use crate::draw::{RecordingSink, Stroke};
use crate::rect::Bounds2;
use std::f64::consts::{FRAC_PI_2, PI};

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

#[test]
fn point_at_parameterization() {
    let l = Line::new(v(2.0, -1.0), v(1.0, 1.0));
    assert_eq!(l.point_at(0.0), v(1.0, 1.0));
    assert_eq!(l.point_at(1.0), v(3.0, 0.0));
    assert_eq!(l.point_at(-2.0), v(-3.0, 3.0));
}

#[test]
fn perpendicular_lines_meet_exactly() {
    let a = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    let b = Line::new(v(0.0, 1.0), v(5.0, 0.0));
    assert_eq!(a.intersect_line(&b), Some(v(5.0, 0.0)));
    assert_eq!(b.intersect_line(&a), Some(v(5.0, 0.0)));
}

#[test]
fn parallel_and_coincident_lines_do_not_intersect() {
    let a = Line::new(v(1.0, 2.0), v(0.0, 0.0));
    let shifted = Line::new(v(-3.0, -6.0), v(1.0, 0.0));
    let same = Line::new(v(2.0, 4.0), v(1.0, 2.0));
    assert_eq!(a.intersect_line(&shifted), None);
    assert_eq!(a.intersect_line(&same), None);
    assert_eq!(a.intersect_line(&a), None);
    assert!(a.is_parallel_to(&shifted));
    assert!(a.is_parallel_to(&same));
    assert!(!a.is_parallel_to(&Line::new(v(0.0, 1.0), v(0.0, 0.0))));
}

#[test]
fn segment_intersection_respects_segment_bounds_only() {
    let l = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    assert_eq!(l.intersect_segment(v(2.0, -1.0), v(2.0, 1.0)), Some(v(2.0, 0.0)));
    // behind the origin is fine: t is unconstrained
    assert_eq!(l.intersect_segment(v(-4.0, -1.0), v(-4.0, 1.0)), Some(v(-4.0, 0.0)));
    // endpoints count
    assert_eq!(l.intersect_segment(v(3.0, 0.0), v(3.0, 2.0)), Some(v(3.0, 0.0)));
    // segment ends short of the line
    assert_eq!(l.intersect_segment(v(2.0, 1.0), v(2.0, 3.0)), None);
    // parallel segment
    assert_eq!(l.intersect_segment(v(0.0, 0.0), v(5.0, 0.0)), None);
}

#[test]
fn rect_intersection_collects_distinct_points_in_edge_order() {
    let rect = Bounds2::new(0.0, 0.0, 10.0, 10.0);
    let horizontal = Line::new(v(1.0, 0.0), v(0.0, 5.0));
    assert_eq!(horizontal.intersect_rect(&rect), vec![v(10.0, 5.0), v(0.0, 5.0)]);

    // diagonal through two corners: each corner reported once
    let diagonal = Line::new(v(1.0, 1.0), v(0.0, 0.0));
    assert_eq!(diagonal.intersect_rect(&rect), vec![v(0.0, 0.0), v(10.0, 10.0)]);

    let outside = Line::new(v(1.0, 0.0), v(0.0, 20.0));
    assert!(outside.intersect_rect(&rect).is_empty());
}

#[test]
fn projection_and_distance() {
    let l = Line::new(v(2.0, 0.0), v(1.0, 1.0));
    let p = v(5.0, 3.0);
    assert_eq!(l.length_to(p), 2.0);
    assert_eq!(l.projection_of_point(p).to_bits(), l.length_to(p).to_bits());
    assert_eq!(l.closest_point(p), v(5.0, 1.0));
    assert_eq!(l.distance_to_point(p), 2.0);

    let axis = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    assert_eq!(axis.distance_to_point(v(3.0, 4.0)), 4.0);
    assert_eq!(axis.length_to(v(-3.0, 4.0)), -3.0);
}

#[test]
fn zero_direction_metrics_are_unguarded() {
    let l = Line::new(Vector2::ZERO, v(1.0, 1.0));
    assert!(l.length_to(v(2.0, 2.0)).is_nan());
    assert!(l.projection_of_point(v(2.0, 2.0)).is_nan());
    assert!(l.distance_to_point(v(2.0, 2.0)).is_nan());
    assert!(matches!(
        Line::try_new(Vector2::ZERO, v(1.0, 1.0)),
        Err(GeomError::DegenerateGeometry { .. })
    ));
    assert!(Line::through(v(1.0, 1.0), v(1.0, 1.0)).is_err());
}

#[test]
fn through_two_points() {
    let l = Line::through(v(1.0, 2.0), v(4.0, 6.0)).unwrap();
    assert_eq!(l.point_at(0.0), v(1.0, 2.0));
    assert_eq!(l.point_at(1.0), v(4.0, 6.0));
}

#[test]
fn collision_tolerance_is_fixed() {
    let l = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    assert!(l.detect_collision(v(123.0, 0.0)));
    assert!(l.detect_collision(v(-7.0, 5e-9)));
    assert!(!l.detect_collision(v(-7.0, 2e-8)));
}

#[test]
fn signed_angle_between_lines() {
    let x = Line::new(v(1.0, 0.0), v(0.0, 0.0));
    let y = Line::new(v(0.0, 3.0), v(1.0, 1.0));
    assert_eq!(x.angle_with(&y), FRAC_PI_2);
    assert_eq!(y.angle_with(&x), -FRAC_PI_2);
    assert_eq!(x.angle_with(&x.reversed()), PI);
}

#[test]
fn antiparallel_signed_zero_directions_give_pi() {
    let origin = Vector2::ZERO;
    let a = Line::new(v(1.0, -0.0), origin);
    let b = Line::new(v(-1.0, -0.0), origin);
    // cross is -0.0 here, which a raw atan2 turns into -π
    assert_eq!(a.angle_with(&b), PI);
    assert_eq!(b.angle_with(&a), PI);
    let ang = Line::new(v(-1.0, 0.0), origin).angle_with(&Line::new(v(1.0, -1e-300), origin));
    assert!(ang > -PI && ang <= PI);
}

#[test]
fn direction_manipulation() {
    let mut l = Line::new(v(3.0, 4.0), v(1.0, 1.0));
    l.normalize_direction();
    assert_eq!(l.direction, v(0.6, 0.8));
    assert_eq!(l.start_pos, v(1.0, 1.0));

    let mut z = Line::new(Vector2::ZERO, v(0.0, 0.0));
    z.normalize_direction();
    assert_eq!(z.direction, Vector2::ZERO);

    let r = Line::new(v(1.0, -2.0), v(5.0, 5.0)).reversed();
    assert_eq!(r.direction, v(-1.0, 2.0));
    assert_eq!(r.start_pos, v(5.0, 5.0));
}

#[test]
fn segments_and_drawing() {
    let l = Line::new(v(3.0, 4.0), v(1.0, 1.0));
    let (a, b) = l.to_segment_length(10.0);
    assert_eq!(a, v(1.0, 1.0));
    assert!((b - v(7.0, 9.0)).magnitude() < 1e-12);
    assert_eq!(l.to_segment_between(-1.0, 2.0), (v(-2.0, -3.0), v(7.0, 9.0)));

    let mut sink = RecordingSink::default();
    l.draw_segment(&mut sink, &"red", -1.0, 2.0, 3);
    l.draw_with(&mut sink, &"blue", DrawCfg::default());
    assert_eq!(
        sink.strokes[0],
        Stroke {
            color: "red",
            start: v(-2.0, -3.0),
            end: v(7.0, 9.0),
            width: 3
        }
    );
    assert_eq!(sink.strokes[1].width, 1);
    assert!((sink.strokes[1].end - v(601.0, 801.0)).magnitude() < 1e-9);
}
