use calcgraph_rs::{parse, sample, Environment, SampleRange};

fn main() {
    pretty_env_logger::init();

    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sin(x)*x".to_string());

    let expr = match parse(&source) {
        Ok(expr) => expr,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let range = SampleRange::new(-5.0, 5.0, 0.5).expect("static range is valid");
    let mut env = Environment::new();

    println!("{:>8} | y = {}", "x", source);
    for point in sample(&expr, "x", &range, &mut env) {
        if point.y.is_finite() {
            println!("{:>8.2} | {:.6}", point.x, point.y);
        } else {
            println!("{:>8.2} | Undefined", point.x);
        }
    }
}
