//! Euler bend report — prints the resolved parameters and shape summary of a bend.
//!
//! Usage:
//! ```text
//! cargo run --example bend_report                      # default 90° bend, R = 10
//! cargo run --example bend_report -- 5 45 200          # R, angle in degrees, samples
//! cargo run --example bend_report -- --to 30 12 400    # end point dx dy, samples
//! RUST_LOG=eulerbend=debug cargo run --example bend_report
//! ```

use eulerbend::operations::query::{BoundingBox, CurvatureProfile, PolylineLength};
use eulerbend::{BendError, BendSpec};

fn parse(args: &[String], index: usize) -> Option<f64> {
    args.get(index).and_then(|a| a.parse().ok())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn spec_from_args(args: &[String]) -> Result<BendSpec, BendError> {
    let mut builder = BendSpec::builder();
    if args.first().map(String::as_str) == Some("--to") {
        let dx = parse(args, 1).unwrap_or(20.0);
        let dy = parse(args, 2).unwrap_or(20.0);
        if let Some(n) = parse(args, 3) {
            builder = builder.num_points(n as usize);
        }
        builder = builder.end_point(dx, dy);
    } else {
        if let Some(r) = parse(args, 0) {
            builder = builder.min_radius(r);
        }
        if let Some(deg) = parse(args, 1) {
            builder = builder.end_angle_degrees(deg);
        }
        if let Some(n) = parse(args, 2) {
            builder = builder.num_points(n as usize);
        }
    }
    builder.build()
}

fn main() -> Result<(), BendError> {
    // Default: WARN for everything, INFO for eulerbend.
    // Override with RUST_LOG env var (e.g. RUST_LOG=eulerbend=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("eulerbend=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let spec = spec_from_args(&args)?;
    let curve = spec.curve()?;

    let length = PolylineLength::new(curve.points()).execute()?;
    let bbox = BoundingBox::new(curve.points()).execute()?;
    let tightest = CurvatureProfile::new(curve.points()).tightest_radius()?;

    println!("min radius     : {:.6}", spec.min_radius());
    println!("end angle      : {:.6} deg", spec.end_angle_degrees());
    println!("samples        : {}", curve.len());
    println!("end point      : ({:.6}, {:.6})", curve.end().x, curve.end().y);
    println!("chord          : {:.6}", curve.chord_length());
    println!("length         : {length:.6}");
    println!("bounding box   : {:.6} x {:.6}", bbox.width(), bbox.height());
    match tightest {
        Some(r) => println!("tightest radius: {r:.6}"),
        None => println!("tightest radius: straight"),
    }
    Ok(())
}
