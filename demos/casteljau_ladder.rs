use curve_sketch::{Bezier, Point2};

fn main() {
    env_logger::init();

    let mut curve = Bezier::new([
        Point2::new(200.0f64, 200.0),
        Point2::new(400.0, 200.0),
        Point2::new(200.0, 400.0),
        Point2::new(400.0, 400.0),
    ]);

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        println!("t={:.2}", t);
        for (round, level) in curve.levels(t).iter().enumerate() {
            let coords: Vec<String> = level
                .iter()
                .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
                .collect();
            println!("  round {}: {}", round, coords.join(" "));
        }
        println!("  tangent: {:?}", curve.tangent(t));
    }

    // drag the second control point like a mouse would
    for p in &mut curve {
        if *p == Point2::new(400.0, 200.0) {
            *p = Point2::new(450.0, 150.0);
        }
    }
    let legs: Vec<String> = curve.control_polygon_legs().map(|l| format!("{:.1}", l)).collect();
    println!("after drag: B(0.5)={:?}", curve.eval(0.5));
    println!(
        "control polygon legs: {} (total {:.1}, curve ~{:.1})",
        legs.join(" "),
        curve.control_polygon_length(),
        curve.arclen(64)
    );
}
