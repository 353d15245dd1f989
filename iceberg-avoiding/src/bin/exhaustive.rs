use miette::*;

use iceberg_avoiding::exhaustive;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");
    let result = exhaustive::process(input)?;
    println!("Result: {}", result);
    Ok(())
}
