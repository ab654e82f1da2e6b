//! Prints the classical and quantum panels of the search comparison for a few
//! sizes, in text.

use qcompare::search::{complexity_series_with, GroverPhase, ScanEvent};
use qcompare::{EngineConfig, QcError, SearchProblem, Strategy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QcError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EngineConfig::default();
    config.validate()?;

    for (n, m) in [(16, 9), (32, 30), (64, 40)] {
        let problem = SearchProblem::new(n, m)?;
        println!("\n=== {} ===", problem.report());

        let scan: String = problem
            .linear_scan()
            .iter()
            .filter_map(|e| match e {
                ScanEvent::Miss(_) => Some('.'),
                ScanEvent::Found(_) => Some('*'),
                ScanEvent::Inspect(_) => None,
            })
            .collect();
        println!("classical scan : {}", scan);

        let script: Vec<String> = problem
            .grover_phases()
            .iter()
            .map(|p| match p {
                GroverPhase::Prepare => "prepare".to_string(),
                GroverPhase::OracleMark { target } => format!("mark({})", target),
                GroverPhase::Amplify { step } => format!("amplify#{}", step),
                GroverPhase::Measure { target } => format!("measure({})", target),
            })
            .collect();
        println!("quantum script : {}", script.join(" -> "));

        let parallel = problem.parallel_search_with(&config);
        println!(
            "parallel       : {} round(s), found = {}",
            parallel.steps(),
            parallel.found
        );

        let quantum = problem.probability_distribution(Strategy::Quantum);
        println!(
            "P(target)      : classical {:.4} / quantum {:.4}",
            problem.probability_distribution(Strategy::Classical)[m],
            quantum[m]
        );
    }

    println!("\nComplexity (every 25th point):");
    for point in complexity_series_with(config.max_graph_size, &config)?
        .iter()
        .filter(|p| p.n % 25 == 0)
    {
        println!("  N={:>3}  O(N)={:>6.1}  O(sqrt N)={:>5.2}", point.n, point.classical, point.quantum);
    }
    Ok(())
}
