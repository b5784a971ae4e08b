use super::*;

const EPS: f64 = 1e-9;

#[test]
fn polar_point_zero_degrees_is_twelve_oclock() {
    let c = Canvas::FACE.center();
    let p = polar_point(c, 100.0, 0.0);
    assert!((p.x - c.x).abs() < EPS);
    assert!(p.y < c.y);
    assert!((p.y - (c.y - 100.0)).abs() < EPS);
}

#[test]
fn polar_point_ninety_degrees_is_three_oclock() {
    let c = Point::new(227.0, 227.0);
    let p = polar_point(c, 50.0, 90.0);
    assert!((p.y - c.y).abs() < EPS);
    assert!((p.x - 277.0).abs() < EPS);
}

#[test]
fn polar_point_runs_clockwise() {
    let c = Point::new(0.0, 0.0);
    let six = polar_point(c, 10.0, 180.0);
    let nine = polar_point(c, 10.0, 270.0);
    assert!((six.y - 10.0).abs() < EPS);
    assert!((nine.x + 10.0).abs() < EPS);
}

#[test]
fn dial_direction_matches_polar_point() {
    let c = Point::new(5.0, 7.0);
    for angle in [0.0, 33.0, 162.0, 313.5] {
        let p = polar_point(c, 3.0, angle);
        let d = dial_direction(angle);
        assert!((p.x - (c.x + 3.0 * d.x)).abs() < EPS);
        assert!((p.y - (c.y + 3.0 * d.y)).abs() < EPS);
    }
}

#[test]
fn sample_time_hand_angles() {
    let t = ClockTime::new(10, 27, 45).unwrap();
    assert_eq!(t.hour_angle(), 313.5);
    assert_eq!(t.minute_angle(), 162.0);
    assert_eq!(t.second_angle(), 270.0);
}

#[test]
fn afternoon_hours_wrap_onto_twelve_hour_dial() {
    let am = ClockTime::new(3, 15, 0).unwrap();
    let pm = ClockTime::new(15, 15, 0).unwrap();
    assert_eq!(am.hour_angle(), pm.hour_angle());
    assert_eq!(pm.hour_angle(), 97.5);
}

#[test]
fn clock_time_parses_and_validates() {
    let t: ClockTime = "10:27".parse().unwrap();
    assert_eq!((t.hour(), t.minute(), t.second()), (10, 27, 0));
    let t: ClockTime = " 23:59:59 ".parse().unwrap();
    assert_eq!(t.to_string(), "23:59:59");
    assert_eq!(t.hh_mm(), "23:59");

    assert!("24:00".parse::<ClockTime>().is_err());
    assert!("10:60".parse::<ClockTime>().is_err());
    assert!("10:27:60".parse::<ClockTime>().is_err());
    assert!("10".parse::<ClockTime>().is_err());
    assert!("ten:27".parse::<ClockTime>().is_err());
}

#[test]
fn clock_time_serde_is_a_string() {
    let t = ClockTime::new(8, 5, 9).unwrap();
    let v = serde_json::to_value(t).unwrap();
    assert_eq!(v, serde_json::json!("08:05:09"));
    let back: ClockTime = serde_json::from_value(v).unwrap();
    assert_eq!(back, t);
}

#[test]
fn face_canvas_geometry() {
    assert_eq!(Canvas::FACE.width, 454);
    assert_eq!(Canvas::FACE.center(), Point::new(227.0, 227.0));
    assert_eq!(Canvas::FACE.radius(), 227.0);
    assert_eq!(Canvas::new(50, 20).radius(), 10.0);
    assert_eq!(Canvas::new(2, 3).rgba_len(), 24);
}
