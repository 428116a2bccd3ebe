// ============================================================================
// Simulation Driver Example
// ============================================================================
//
// Reads an input description, runs a fixed number of steps, and writes one
// text snapshot per step:
//
//     cargo run --example simulate -- input.txt

use field_engine::prelude::*;
use std::process::ExitCode;
use std::time::Instant;

const STEP_COUNT: usize = 10;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> FieldResult<()> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.txt".to_string());

    println!("=== Field Engine Example ===\n");

    let input = SimulationInput::read_from_file(&input_path)?;
    println!(
        "Loaded {}: {}x{} grid, gravity {}, density {}",
        input_path, input.width, input.height, input.gravity, input.density
    );

    let mut solver = FieldSolver::<Cell>::new(input.width, input.height)?;
    solver.initialize(&input.fixed_values::<Cell>())?;

    let workers = default_worker_count();
    println!("Using {workers} workers for stepping\n");

    let total_started = Instant::now();
    for step in 1..=STEP_COUNT {
        let step_started = Instant::now();
        solver.step(input.gravity, input.density, workers)?;
        let elapsed = step_started.elapsed();

        let snapshot_path = format!("output_step_{step}.txt");
        solver.save_text(&snapshot_path)?;
        println!(
            "Step {step} completed in {:.3} ms -> {snapshot_path}",
            elapsed.as_secs_f64() * 1e3
        );
    }

    println!(
        "\nSimulation completed in {:.3} s",
        total_started.elapsed().as_secs_f64()
    );
    Ok(())
}
