use miette::*;

use aoc2025_day_3::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(aoc2025_day_3::log_filter())
        .init();
    let input = include_str!("../../input2.txt");
    let result = part2::process(input)?;
    println!("Result: {}", result);
    Ok(())
}
