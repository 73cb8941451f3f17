//! Unit-level checks of the individual steering rules.
//! Covers the zero-speed fallback, the cohesion/repulsion boundary and the
//! perception cut-off.
use approx::assert_relative_eq;
use flock::{
    Boid, Neighbours, DESIRED_SEPARATION, DESIRED_SPEED, MAX_ACCELERATION,
    MAX_PERCEPTION_DISTANCE,
};
use glam::Vec3;
use rstest::rstest;
use test_utils::{assert_vec3_near, boid};

#[rstest]
#[case::exactly_zero([0.0, 0.0, 0.0])]
#[case::below_tolerance([0.0, 5.0e-7, 0.0])]
#[case::tiny_diagonal([1.0e-7, -1.0e-7, 1.0e-7])]
fn near_zero_speed_cruises_along_y(#[case] velocity: [f32; 3]) {
    let b = boid([3.0, -2.0, 7.0], velocity);
    assert_eq!(b.cruise(), Vec3::Y * DESIRED_SPEED);
}

#[rstest]
#[case([0.5, 0.0, 0.0])]
#[case([3.0, -4.0, 0.0])]
#[case([-7.0, 11.0, 2.5])]
#[case([100.0, 0.1, -40.0])]
fn cruise_equals_normalised_form(#[case] velocity: [f32; 3]) {
    let b = boid([0.0, 0.0, 0.0], velocity);
    let v = Vec3::from_array(velocity);
    let reference = v.normalize() * DESIRED_SPEED - v;
    let actual = b.cruise();
    let scale = v.length().max(DESIRED_SPEED);
    assert_relative_eq!(actual.x, reference.x, epsilon = 1e-5 * scale);
    assert_relative_eq!(actual.y, reference.y, epsilon = 1e-5 * scale);
    assert_relative_eq!(actual.z, reference.z, epsilon = 1e-5 * scale);
}

#[rstest]
#[case::just_outside(DESIRED_SEPARATION + 1.0e-3, 1.0)]
#[case::exactly_at(DESIRED_SEPARATION, -1.0)]
#[case::just_inside(DESIRED_SEPARATION - 1.0e-3, -1.0)]
#[case::far(10.0, 1.0)]
fn cohesion_flips_to_repulsion_at_desired_separation(#[case] distance: f32, #[case] sign: f32) {
    let flock = [boid([0.0, 0.0, 0.0], [0.0; 3]), boid([distance, 0.0, 0.0], [0.0; 3])];
    let steer = flock[0].congregate(Neighbours::excluding(&flock, 0));
    assert_vec3_near(steer, Vec3::X * MAX_ACCELERATION * sign, 1e-4);
}

#[test]
fn coincident_neighbour_gets_fixed_nudge() {
    let flock = [boid([1.0, 1.0, 1.0], [0.0; 3]), boid([1.0, 1.0, 1.0], [2.0, 0.0, 0.0])];
    let steer = flock[0].congregate(Neighbours::excluding(&flock, 0));
    assert_eq!(steer, Vec3::X * MAX_ACCELERATION);
}

#[rstest]
#[case::empty(vec![])]
#[case::at_radius(vec![boid([MAX_PERCEPTION_DISTANCE, 0.0, 0.0], [1.0, 0.0, 0.0])])]
#[case::far_away(vec![
    boid([0.0, 25.0, 0.0], [0.0, 1.0, 0.0]),
    boid([-30.0, 0.0, 4.0], [0.0, 0.0, 1.0]),
])]
fn no_visible_neighbour_means_no_social_steering(#[case] others: Vec<Boid>) {
    let me = boid([0.0, 0.0, 0.0], [3.0, 1.0, 0.0]);
    let view = Neighbours::including_self(&others);
    assert!(me.find_closest(view).is_none());
    assert_eq!(me.align(view), Vec3::ZERO);
    assert_eq!(me.congregate(view), Vec3::ZERO);
}

#[test]
fn align_steers_towards_neighbour_heading_at_cruise_speed() {
    let flock = [
        boid([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        boid([0.0, 4.0, 0.0], [0.0, 0.0, 3.0]),
    ];
    let steer = flock[0].align(Neighbours::excluding(&flock, 0));
    assert_vec3_near(steer, Vec3::new(-1.0, 0.0, DESIRED_SPEED), 1e-5);
}

#[test]
fn closest_is_the_nearest_not_the_first() {
    let flock = [
        boid([0.0, 0.0, 0.0], [0.0; 3]),
        boid([9.0, 0.0, 0.0], [0.0; 3]),
        boid([0.0, 2.0, 0.0], [0.0; 3]),
        boid([0.0, 0.0, 2.0], [0.0; 3]),
    ];
    let closest = flock[0].find_closest(Neighbours::excluding(&flock, 0));
    assert_eq!(closest, Some(&flock[2]));
}

#[test]
fn separation_rule_stays_inert() {
    let flock = [boid([0.0, 0.0, 0.0], [0.0; 3]), boid([0.1, 0.0, 0.0], [0.0; 3])];
    assert_eq!(flock[0].separate(Neighbours::excluding(&flock, 0)), Vec3::ZERO);
    assert_eq!(flock[0].separate(Neighbours::including_self(&flock)), Vec3::ZERO);
}
