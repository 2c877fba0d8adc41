//! Prints the textbook fuzzy-set reports: the L1-distance matrix, counts
//! under both count policies, ratio entropy with near/far vertices, the
//! subsethood matrix, and a small fuzzy-Bayes evaluation.

mod report;

use fitvec::FuzzyVector;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("building fit-vector fixtures");

    let sets = vec![
        ("X", FuzzyVector::ones(4)),
        ("O", FuzzyVector::zeros(4)),
        ("A", FuzzyVector::new(vec![0.3, 0.6, 0.4, 0.2])?),
        ("B", FuzzyVector::new(vec![0.4, 0.5, 0.4, 0.7])?),
        ("C", FuzzyVector::new(vec![0.6, 0.7, 0.7, 1.0])?),
        ("D", FuzzyVector::new(vec![1.0, 1.0, 0.0, 0.0])?),
        ("E", FuzzyVector::new(vec![1.0, 0.0, 1.0, 0.0])?),
        ("M", FuzzyVector::new(vec![0.5, 0.5, 0.5, 0.5])?),
    ];

    let rule = "=".repeat(80);

    println!("L1 distances");
    println!("{}", report::distance_table(&sets));
    println!("{rule}");

    println!("Count of vector c(A)");
    println!("{}", report::count_table(&sets));
    println!("{rule}");

    println!("Ratio entropy");
    println!("{}", report::entropy_table(&sets));
    println!("{rule}");

    println!("Subsethood S(A,B)");
    println!("{}", report::subsethood_table(&sets));
    println!("{rule}");

    // Fuzzy Bayes: how strongly the evidence fits each hypothesis.
    let evidence = FuzzyVector::new(vec![0.9, 0.8, 0.6, 0.4, 0.2, 0.0])?;
    let hypotheses = vec![
        ("H1", FuzzyVector::new(vec![1.0, 0.8, 0.0, 0.1, 0.1, 0.0])?),
        ("H2", FuzzyVector::new(vec![0.0, 0.0, 0.7, 1.0, 0.0, 0.3])?),
        ("H3", FuzzyVector::new(vec![0.1, 0.4, 1.0, 1.0, 0.4, 0.1])?),
    ];

    println!("Fuzzy Bayes evaluation");
    print!("{}", report::bayes_table("E", &evidence, &hypotheses));

    tracing::info!("report complete");
    Ok(())
}
