//! Table rendering over named fit vectors.
//!
//! Every table is returned as a string; errors from the algebra (zero
//! counts, undefined entropy) surface as `NaN` cells at this presentation
//! boundary rather than aborting the report.

use fitvec::{CountPolicy, FuzzyPolicy, FuzzyVector};

/// Formats a scalar result to two decimals, or `NaN` when the algebra
/// reports the value as undefined.
fn cell(result: fitvec::Result<f64>) -> String {
    match result {
        Ok(v) => format!("{v:.2}"),
        Err(_) => "NaN".to_string(),
    }
}

/// Pairwise L1-distance matrix, rows and columns labeled by name.
pub fn distance_table(sets: &[(&str, FuzzyVector)]) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for (name, _) in sets {
        out.push_str(&format!("{name:>6}"));
    }
    out.push('\n');
    for (row_name, row) in sets {
        out.push_str(&format!("{row_name} :"));
        for (_, col) in sets {
            out.push_str(&format!("{:>6}", cell(row.distance(col))));
        }
        out.push('\n');
    }
    out
}

/// Per-vector count under both the sum and the product policy.
pub fn count_table(sets: &[(&str, FuzzyVector)]) -> String {
    let product = FuzzyPolicy::default().with_count(CountPolicy::Product);
    let mut out = String::new();
    for (name, vector) in sets {
        out.push_str(&format!(
            "{name} : sum={}  product={}\n",
            cell(vector.count()),
            cell(vector.under_policy(product).count()),
        ));
    }
    out
}

/// Per-vector near/far hypercube vertices and ratio entropy.
pub fn entropy_table(sets: &[(&str, FuzzyVector)]) -> String {
    let mut out = String::new();
    for (name, vector) in sets {
        out.push_str(&format!(
            "{name} : {name}_near={} {name}_far={} E({name})={}\n",
            vector.near(),
            vector.far(),
            cell(vector.fuzziness()),
        ));
    }
    out
}

/// Subsethood matrix S(row, column).
pub fn subsethood_table(sets: &[(&str, FuzzyVector)]) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for (name, _) in sets {
        out.push_str(&format!("{name:>6}"));
    }
    out.push('\n');
    for (row_name, row) in sets {
        out.push_str(&format!("{row_name} :"));
        for (_, col) in sets {
            out.push_str(&format!("{:>6}", cell(row.subsethood(col))));
        }
        out.push('\n');
    }
    out
}

/// Subsethood of an evidence vector against each hypothesis vector.
pub fn bayes_table(
    evidence_name: &str,
    evidence: &FuzzyVector,
    hypotheses: &[(&str, FuzzyVector)],
) -> String {
    let mut out = String::new();
    for (name, hypothesis) in hypotheses {
        out.push_str(&format!(
            "S({evidence_name}, {name})={}\n",
            cell(evidence.subsethood(hypothesis)),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> Vec<(&'static str, FuzzyVector)> {
        vec![
            ("O", FuzzyVector::zeros(4)),
            ("A", FuzzyVector::new(vec![0.3, 0.6, 0.4, 0.2]).unwrap()),
            ("B", FuzzyVector::new(vec![0.4, 0.5, 0.4, 0.7]).unwrap()),
        ]
    }

    #[test]
    fn test_distance_table_worked_example() {
        let table = distance_table(&fixtures());
        // d(A, B) = 0.7, d(A, A) = 0.
        let row_a = table.lines().find(|l| l.starts_with("A :")).unwrap();
        assert!(row_a.contains("0.70"));
        assert!(row_a.contains("0.00"));
    }

    #[test]
    fn test_count_table_policies() {
        let table = count_table(&fixtures());
        let row_a = table.lines().find(|l| l.starts_with("A :")).unwrap();
        assert!(row_a.contains("sum=1.50"));
        assert!(row_a.contains("product=0.01"));
    }

    #[test]
    fn test_entropy_table_renders_vertices() {
        let m = vec![("M", FuzzyVector::new(vec![0.5, 0.5, 0.5, 0.5]).unwrap())];
        let table = entropy_table(&m);
        assert!(table.contains("M_near=(1.00,1.00,1.00,1.00)"));
        assert!(table.contains("M_far=(0.00,0.00,0.00,0.00)"));
        assert!(table.contains("E(M)=1.00"));
    }

    #[test]
    fn test_subsethood_table_marks_undefined_rows() {
        let table = subsethood_table(&fixtures());
        // S(O, ·) divides by c(O) = 0.
        let row_o = table.lines().find(|l| l.starts_with("O :")).unwrap();
        assert!(row_o.contains("NaN"));
        // S(A, A) = 1.
        let row_a = table.lines().find(|l| l.starts_with("A :")).unwrap();
        assert!(row_a.contains("1.00"));
    }

    #[test]
    fn test_bayes_table() {
        let evidence = FuzzyVector::new(vec![0.9, 0.8, 0.6, 0.4, 0.2, 0.0]).unwrap();
        let hypotheses = vec![(
            "H1",
            FuzzyVector::new(vec![1.0, 0.8, 0.0, 0.1, 0.1, 0.0]).unwrap(),
        )];
        let table = bayes_table("E", &evidence, &hypotheses);
        // c(E ∩ H1) / c(E) = 1.9 / 2.9
        assert_eq!(table.trim(), "S(E, H1)=0.66");
    }
}
