#[cfg(test)]
mod tests {
    use crate::{Kernel, run_kernel};

    #[test]
    fn kernel_names_are_stable() {
        let names: Vec<_> = Kernel::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec!["ack", "btree", "collatz", "fib", "selection-sort", "sieve"]
        );
    }

    #[test]
    fn sieve_run_reports_reference_count() {
        let run = run_kernel(Kernel::Sieve).expect("run sieve");
        assert_eq!(run.lines, vec!["78498".to_string()]);
        assert_eq!(run.report.kernel, "sieve");
        assert_eq!(run.report.values, vec![78498]);
        assert!(run.report.elapsed_ms >= 0.0);
    }

    #[test]
    fn selection_sort_run_reports_largest_element() {
        let run = run_kernel(Kernel::SelectionSort).expect("run selection sort");
        assert_eq!(run.lines, vec!["3999".to_string()]);
        assert_eq!(run.report.values, vec![3999]);
    }

    #[test]
    fn collatz_run_reports_pinned_maximum() {
        let run = run_kernel(Kernel::Collatz).expect("run collatz");
        assert_eq!(run.report.values, vec![350]);
    }

    #[test]
    fn report_serializes_to_flat_object() {
        let run = run_kernel(Kernel::Sieve).expect("run sieve");
        let json = serde_json::to_value(&run.report).expect("serialize report");
        assert_eq!(json["kernel"], "sieve");
        assert_eq!(json["values"][0], 78498);
        assert!(json["elapsed_ms"].is_number());
    }
}
