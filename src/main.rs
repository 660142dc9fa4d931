// Pass by Value vs Pass by Reference
// Run with: cargo run -- [--config FILE] [--iterations N] [--warmup N]

use colored::Colorize;
use pass_semantics::{
    compare, pass_by_reference, pass_by_value, BigStruct, DemoConfig, DemoError, Measurement, OBJ,
};
use std::mem::size_of;

fn print_measurement(m: &Measurement) {
    println!(
        "  {:<18} {:>10} calls in {:?} ({:.2} ns/call)",
        m.name,
        m.iterations,
        m.elapsed,
        m.nanos_per_call()
    );
}

fn main() -> Result<(), DemoError> {
    let config = DemoConfig::from_args(std::env::args().skip(1))?;

    println!("{}", "=== Pass by Value vs Pass by Reference ===".bold());
    println!("size_of::<BigStruct>()  = {} bytes", size_of::<BigStruct>());
    println!("size_of::<&BigStruct>() = {} bytes", size_of::<&BigStruct>());

    // The two calls themselves
    pass_by_value(OBJ);
    pass_by_reference(&OBJ);
    println!("Both calls returned, global is {:?}", OBJ);

    println!(
        "\n{} ({} iterations, {} warmup)",
        "Timing".bold(),
        config.iterations,
        config.warmup
    );
    let comparison = compare(&config);
    print_measurement(&comparison.by_value);
    print_measurement(&comparison.by_reference);

    match comparison.ratio() {
        Some(ratio) => println!(
            "\n{}",
            format!("By value was {:.1}x the cost of by reference", ratio).yellow()
        ),
        None => println!("\n{}", "By reference was too fast to measure".yellow()),
    }
    println!("For stable numbers: cargo bench");

    Ok(())
}
