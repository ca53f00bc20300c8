use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use curve_sketch::{
    subdivision_levels, Bessel, Bezier, CubicHermite, Curve, HermiteSpline, LagrangePolynomial,
    Point2,
};

type P = Point2<f64>;
type DemoResult = Result<(), Box<dyn std::error::Error>>;

const STEPS: usize = 500;

fn to_tuples(points: &[P]) -> Vec<(f64, f64)> {
    points.iter().map(|&p| p.into()).collect()
}

/// Set up a panel with the usual canvas extent and draw the control points onto it
fn panel<'a, DB>(
    area: &'a DrawingArea<DB, Shift>,
    caption: &str,
    control_points: &[P],
) -> Result<ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>, Box<dyn std::error::Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18).into_font())
        .margin(5)
        .x_label_area_size(25)
        .y_label_area_size(35)
        .build_cartesian_2d(0f64..900f64, 0f64..600f64)?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(PointSeries::of_element(
            to_tuples(control_points),
            4,
            &BLUE,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
        ))?
        .label("control points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    Ok(chart)
}

fn draw_bezier<DB>(area: &DrawingArea<DB, Shift>) -> DemoResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let bezier = Bezier::new([
        Point2::new(100.0, 100.0),
        Point2::new(250.0, 500.0),
        Point2::new(650.0, 500.0),
        Point2::new(800.0, 150.0),
    ]);
    let mut chart = panel(area, "Bezier (de Casteljau)", &bezier.control_points())?;

    // construction lines at t = 0.4, one color per round
    let colors = [BLUE.mix(0.4), GREEN.mix(0.6), MAGENTA.mix(0.6)];
    let levels = subdivision_levels(0.4, &bezier.control_points())?;
    for (level, color) in levels.iter().zip(colors.iter()) {
        chart.draw_series(LineSeries::new(to_tuples(level), *color))?;
    }

    let curve: Vec<P> = bezier.samples(Some(STEPS)).collect();
    chart
        .draw_series(LineSeries::new(to_tuples(&curve), &RED))?
        .label("B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.configure_series_labels().border_style(BLACK).draw()?;
    Ok(())
}

fn draw_hermite<DB>(area: &DrawingArea<DB, Shift>) -> DemoResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let p0 = Point2::new(200.0, 300.0);
    let p1 = Point2::new(600.0, 300.0);
    let m0 = Point2::new(100.0, -100.0);
    let m1 = Point2::new(100.0, 100.0);
    // tangents are drawn at this scale and fed to the segment at the same scale
    let hermite = CubicHermite::new(p0, p1, m0 * 3.0, m1 * 3.0);
    let mut chart = panel(area, "Hermite segment", &[p0, p1])?;

    for (p, m) in [(p0, m0 * 3.0), (p1, m1 * 3.0)] {
        chart.draw_series(LineSeries::new(to_tuples(&[p, p + m * 0.5]), &GREEN))?;
    }

    let curve: Vec<P> = hermite.samples(Some(STEPS)).collect();
    chart
        .draw_series(LineSeries::new(to_tuples(&curve), &RED))?
        .label("H(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.configure_series_labels().border_style(BLACK).draw()?;
    Ok(())
}

fn draw_spline<DB>(area: &DrawingArea<DB, Shift>) -> DemoResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let points = [
        Point2::new(100.0, 300.0),
        Point2::new(250.0, 150.0),
        Point2::new(400.0, 400.0),
        Point2::new(600.0, 250.0),
        Point2::new(800.0, 450.0),
    ];
    let spline: HermiteSpline<P, 8> = HermiteSpline::through(&points, &Bessel)?;
    let mut chart = panel(area, "Hermite spline (Bessel tangents)", &points)?;

    let curve: Vec<P> = spline.samples(Some(STEPS)).collect();
    chart
        .draw_series(LineSeries::new(to_tuples(&curve), &RED))?
        .label("S(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.configure_series_labels().border_style(BLACK).draw()?;
    Ok(())
}

fn draw_lagrange<DB>(area: &DrawingArea<DB, Shift>) -> DemoResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let nodes = [
        Point2::new(200.0, 300.0),
        Point2::new(400.0, 200.0),
        Point2::new(600.0, 400.0),
        Point2::new(700.0, 100.0),
    ];
    let polynomial = LagrangePolynomial::new(&nodes)?;
    let mut chart = panel(area, "Lagrange interpolation", &nodes)?;

    // skip samples that overflow instead of aborting the whole plot
    let curve: Vec<P> = polynomial.samples(Some(STEPS)).filter_map(|r| r.ok()).collect();
    chart
        .draw_series(LineSeries::new(to_tuples(&curve), &RED))?
        .label("L(x)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.configure_series_labels().border_style(BLACK).draw()?;
    Ok(())
}

fn main() -> DemoResult {
    env_logger::init();

    let root = BitMapBackend::new("curve_sketch.png", (1280, 860)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    draw_bezier(&panels[0])?;
    draw_hermite(&panels[1])?;
    draw_spline(&panels[2])?;
    draw_lagrange(&panels[3])?;

    root.present()?;
    log::info!("wrote curve_sketch.png");
    Ok(())
}
