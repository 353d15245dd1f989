use miette::*;

use iceberg_avoiding::dyn_prog;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");
    let result = dyn_prog::process(input)?;
    println!("Result: {}", result);
    Ok(())
}
