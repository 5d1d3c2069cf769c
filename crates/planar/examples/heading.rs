//! Turn a heading toward a moving target, one bounded step per tick.
//!
//! Run: cargo run -p planar --example heading

use std::f64::consts::PI;

use planar::angle::{
    angle_diff, angle_from_vector, deg_to_rad, rad_to_deg, rotate_towards, vector_from_angle,
};
use planar::{Line, Vector2};

fn main() {
    let max_turn = deg_to_rad(15.0);
    let mut position = Vector2::new(0.0, 0.0);
    let mut heading = PI; // facing -x
    let target = Vector2::new(4.0, 3.0);

    for tick in 0..40 {
        let wanted = angle_from_vector(target - position);
        heading = rotate_towards(heading, wanted, max_turn);
        position += vector_from_angle(heading, 0.25);
        let ray = Line::new(vector_from_angle(heading, 1.0), position);
        println!(
            "tick {tick:2}: pos=({:.2}, {:.2}) heading={:7.2}° off-by={:6.2}° miss={:.3}",
            position.x,
            position.y,
            rad_to_deg(heading),
            rad_to_deg(angle_diff(heading, wanted)),
            ray.distance_to_point(target),
        );
        if position.distance_to(target) < 0.25 {
            break;
        }
    }
}
