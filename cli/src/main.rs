use std::sync::Once;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use kernbench_core::{ack, btree, collatz, fib, report::RunReport, sieve, sort, timer};

#[cfg(test)]
mod main_test;

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "kernbench_core=debug,kernbench=debug";

// Reference invocations, matching the other-language variants this suite is
// compared against.
const ACK_M: u64 = 3;
const ACK_N: u64 = 9;
const TREE_MIN_DEPTH: u32 = 4;
const TREE_MAX_DEPTH: u32 = 15;
const COLLATZ_LAST: u64 = 99_999;
const FIB_N: u64 = 33;
const SORT_LEN: i64 = 4000;
const SIEVE_BOUND: usize = 1_000_000;

#[derive(Debug, Parser)]
#[command(
    name = "kernbench",
    version,
    about = "Run one micro-benchmark kernel and print its results and elapsed milliseconds",
    long_about = None
)]
struct CliArgs {
    /// Kernel to run; omit to list the available kernels
    #[arg(value_enum, value_name = "KERNEL")]
    kernel: Option<Kernel>,

    /// Print one JSON object instead of plain result lines
    #[arg(long)]
    json: bool,

    /// List available kernels and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kernel {
    Ack,
    Btree,
    Collatz,
    Fib,
    #[value(name = "selection-sort", alias = "sort")]
    SelectionSort,
    Sieve,
}

impl Kernel {
    const ALL: [Kernel; 6] = [
        Kernel::Ack,
        Kernel::Btree,
        Kernel::Collatz,
        Kernel::Fib,
        Kernel::SelectionSort,
        Kernel::Sieve,
    ];

    fn name(self) -> &'static str {
        match self {
            Kernel::Ack => "ack",
            Kernel::Btree => "btree",
            Kernel::Collatz => "collatz",
            Kernel::Fib => "fib",
            Kernel::SelectionSort => "selection-sort",
            Kernel::Sieve => "sieve",
        }
    }
}

/// One finished kernel run: human-readable result lines plus the
/// serializable report behind `--json`.
struct KernelRun {
    lines: Vec<String>,
    report: RunReport,
}

fn single_value_run(kernel: &'static str, timed: timer::Timed<u64>) -> KernelRun {
    KernelRun {
        lines: vec![timed.value.to_string()],
        report: RunReport {
            kernel,
            values: vec![timed.value as i64],
            elapsed_ms: timed.elapsed_ms(),
        },
    }
}

fn run_btree() -> Result<KernelRun> {
    let timed = timer::time(|| btree::churn(TREE_MIN_DEPTH, TREE_MAX_DEPTH));
    let elapsed_ms = timed.elapsed_ms();
    let churn = timed.value?;

    let mut lines = Vec::new();
    let mut values = Vec::new();
    lines.push(format!(
        "stretch tree of depth {}\t check: {}",
        churn.stretch_depth, churn.stretch_check
    ));
    values.push(churn.stretch_check as i64);
    for run in &churn.runs {
        lines.push(format!(
            "{}\t trees of depth {}\t check: {}",
            run.iterations, run.depth, run.check
        ));
        values.push(run.check as i64);
    }
    lines.push(format!(
        "long lived tree of depth {}\t check: {}",
        churn.max_depth, churn.long_lived_check
    ));
    values.push(churn.long_lived_check as i64);

    Ok(KernelRun {
        lines,
        report: RunReport {
            kernel: "btree",
            values,
            elapsed_ms,
        },
    })
}

fn run_kernel(kernel: Kernel) -> Result<KernelRun> {
    match kernel {
        Kernel::Ack => {
            let timed = timer::time(|| ack::ack(ACK_M, ACK_N));
            Ok(single_value_run("ack", timed))
        }
        Kernel::Btree => run_btree(),
        Kernel::Collatz => {
            let timed = timer::time(|| collatz::max_steps(1..=COLLATZ_LAST));
            Ok(single_value_run("collatz", timed))
        }
        Kernel::Fib => {
            let timed = timer::time(|| fib::fib(FIB_N));
            Ok(single_value_run("fib", timed))
        }
        Kernel::SelectionSort => {
            let mut arr: Vec<i64> = (0..SORT_LEN).collect();
            let timed = timer::time(|| sort::sort_descending(&mut arr));
            let elapsed_ms = timed.elapsed_ms();
            let first = arr[0];
            Ok(KernelRun {
                lines: vec![first.to_string()],
                report: RunReport {
                    kernel: "selection-sort",
                    values: vec![first],
                    elapsed_ms,
                },
            })
        }
        Kernel::Sieve => {
            let timed = timer::time(|| sieve::sieve(SIEVE_BOUND) as u64);
            Ok(single_value_run("sieve", timed))
        }
    }
}

fn maybe_init_trace() {
    let raw = match std::env::var("KERNBENCH_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };
    let trimmed = raw.trim().to_string();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("0")
        || trimmed.eq_ignore_ascii_case("false")
        || trimmed.eq_ignore_ascii_case("off")
    {
        return;
    }
    TRACE_INIT.call_once(move || {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        // "1"/"true"/"on" enable the default filter; any other value is
        // taken as the filter expression itself.
        let filter_expr = if trimmed.eq_ignore_ascii_case("1")
            || trimmed.eq_ignore_ascii_case("true")
            || trimmed.eq_ignore_ascii_case("on")
        {
            std::env::var("RUST_LOG").ok()
        } else {
            Some(trimmed)
        };

        // Logs go to stderr so stdout stays machine-parseable.
        let builder = fmt().with_writer(std::io::stderr);
        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };
        let _ = builder.try_init();
    });
}

fn print_kernel_list() {
    for kernel in Kernel::ALL {
        println!("{}", kernel.name());
    }
}

fn main() -> Result<()> {
    maybe_init_trace();

    let CliArgs { kernel, json, list } = CliArgs::parse();

    if list {
        print_kernel_list();
        return Ok(());
    }

    let Some(kernel) = kernel else {
        print_kernel_list();
        return Ok(());
    };

    tracing::debug!(kernel = kernel.name(), "running kernel");
    let run = run_kernel(kernel)?;
    tracing::debug!(
        kernel = kernel.name(),
        elapsed_ms = run.report.elapsed_ms,
        "kernel finished"
    );

    if json {
        println!("{}", serde_json::to_string(&run.report)?);
    } else {
        for line in &run.lines {
            println!("{line}");
        }
        println!("{}", run.report.elapsed_ms);
    }

    Ok(())
}
