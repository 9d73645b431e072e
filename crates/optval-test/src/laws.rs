//! Law checker - randomized verification of combinator laws
//!
//! Checks:
//! - Factory admission policies
//! - Short-circuit of every caller-supplied function on the empty path
//! - Map/flat_map/filter/or_else semantics
//! - Canonical empty for every absent result
//! - Sync/async parity for present and absent inputs

use std::fmt;

use optval_core::{factory, Nullish, Optional, OptionalError, EMPTY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::{CallProbe, HarnessError};

/// Law checker configuration
#[derive(Clone, Debug)]
pub struct LawConfig {
    /// Number of random inputs
    pub cases: usize,
    /// Probability that an input is a sentinel (0.0 - 1.0)
    pub sentinel_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for LawConfig {
    fn default() -> Self {
        LawConfig {
            cases: 1000,
            sentinel_prob: 0.3,
            seed: 42,
        }
    }
}

impl LawConfig {
    /// Quick pass for unit tests
    pub fn light() -> Self {
        LawConfig {
            cases: 100,
            sentinel_prob: 0.3,
            seed: 42,
        }
    }

    /// Thorough pass
    pub fn heavy() -> Self {
        LawConfig {
            cases: 20_000,
            sentinel_prob: 0.5,
            seed: 42,
        }
    }
}

/// Law identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
    /// Factories accept/empty/reject per their policy
    AdmissionPolicy,
    /// Caller functions never run on the short-circuit path
    ShortCircuit,
    /// `map` re-tests presence of the mapped value
    MapRetest,
    /// `of(v).flat_map(f) == f(v)`
    FlatMapApplication,
    /// `filter` keeps the value iff the predicate holds
    FilterSemantics,
    /// `or_else` and friends pick value or default
    DefaultExtraction,
    /// Absent results equal the canonical empty
    CanonicalEmpty,
    /// `Optional[v]` / `Optional.empty`
    StringForm,
    /// Async combinators agree with their sync counterparts
    AsyncParity,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single failed law
#[derive(Clone, Debug)]
pub struct LawViolation {
    pub law: Law,
    pub input: Nullish<i64>,
    pub detail: String,
}

/// Outcome of a run
#[derive(Clone, Debug, Default)]
pub struct LawReport {
    pub cases_run: usize,
    pub value_inputs: usize,
    pub null_inputs: usize,
    pub undefined_inputs: usize,
    pub violations: Vec<LawViolation>,
}

impl LawReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// No law was violated
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations of one law
    pub fn violations_of(&self, law: Law) -> impl Iterator<Item = &LawViolation> {
        self.violations.iter().filter(move |v| v.law == law)
    }
}

/// Law checker
pub struct LawChecker {
    config: LawConfig,
    rng: StdRng,
    runtime: tokio::runtime::Runtime,
}

impl LawChecker {
    /// Create a checker with its own single-threaded runtime
    pub fn new(config: LawConfig) -> Result<Self, HarnessError> {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        Ok(LawChecker {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            runtime,
        })
    }

    /// Generate a random raw input
    fn generate_input(&mut self) -> Nullish<i64> {
        if self.rng.gen::<f64>() < self.config.sentinel_prob {
            if self.rng.gen::<bool>() {
                Nullish::Null
            } else {
                Nullish::Undefined
            }
        } else {
            Nullish::Value(self.rng.gen_range(-1_000_000..1_000_000))
        }
    }

    /// Run all laws over `config.cases` inputs
    pub fn run(&mut self) -> LawReport {
        let mut report = LawReport::new();

        for _ in 0..self.config.cases {
            let input = self.generate_input();
            let bound = self.rng.gen_range(-1_000_000..1_000_000);

            match input {
                Nullish::Value(_) => report.value_inputs += 1,
                Nullish::Null => report.null_inputs += 1,
                Nullish::Undefined => report.undefined_inputs += 1,
            }

            let mut violations = Vec::new();
            check_admission(input, &mut violations);
            let opt = factory::of_nullish::<i64>(input);
            check_sync(opt, bound, &mut violations);
            self.check_async(opt, bound, &mut violations);

            for (law, detail) in violations {
                debug!(%law, ?input, %detail, "law violated");
                report.violations.push(LawViolation { law, input, detail });
            }
            report.cases_run += 1;
        }

        if report.passed() {
            info!(cases = report.cases_run, "all laws hold");
        } else {
            warn!(
                cases = report.cases_run,
                violations = report.violations.len(),
                "law violations found"
            );
        }
        report
    }

    fn check_async(&self, opt: Optional<i64>, bound: i64, out: &mut Vec<(Law, String)>) {
        self.runtime.block_on(async {
            let probe = CallProbe::new();

            let filtered = opt.filter_async(probe.async_predicate::<i64>(true)).await;
            expect(out, Law::AsyncParity, filtered == opt.filter(|_| true), "filter_async");

            let narrowed = opt
                .filter_async(move |v| std::future::ready(*v > bound))
                .await;
            expect(
                out,
                Law::AsyncParity,
                narrowed == opt.filter(|v| *v > bound),
                "filter_async predicate",
            );

            let mapped = opt
                .map_async(probe.async_mapper(|v: i64| v.wrapping_mul(2)))
                .await;
            expect(
                out,
                Law::AsyncParity,
                mapped == opt.map(|v| v.wrapping_mul(2)),
                "map_async",
            );

            let flat = opt
                .flat_map_async(probe.async_mapper(|v: i64| halve(v)))
                .await;
            expect(out, Law::AsyncParity, flat == opt.flat_map(halve), "flat_map_async");

            let got = opt.or_else_get_async(probe.async_supplier(bound)).await;
            expect(
                out,
                Law::AsyncParity,
                got == opt.or_else(bound),
                "or_else_get_async",
            );

            opt.if_present_async(probe.async_callback::<i64>()).await;

            let try_mapped = opt
                .try_map_async::<i64, _, _, _, _>(|v| {
                    std::future::ready(Ok::<_, ()>(v.wrapping_mul(2)))
                })
                .await;
            expect(
                out,
                Law::AsyncParity,
                try_mapped == Ok(opt.map(|v| v.wrapping_mul(2))),
                "try_map_async",
            );

            let try_got = opt
                .try_or_else_get_async(move || std::future::ready(Ok::<_, ()>(bound)))
                .await;
            expect(
                out,
                Law::AsyncParity,
                try_got == Ok(opt.or_else(bound)),
                "try_or_else_get_async",
            );

            // filter, map, flat_map and if_present run only when present;
            // the supplier runs only when absent.
            let expected = if opt.is_present() { 4 } else { 1 };
            expect(
                out,
                Law::ShortCircuit,
                probe.calls() == expected,
                &format!("async calls {} != {}", probe.calls(), expected),
            );

            let present = CallProbe::new();
            let absent = CallProbe::new();
            opt.if_present_or_else_async(present.async_callback::<i64>(), absent.async_action())
                .await;
            expect(
                out,
                Law::AsyncParity,
                present.calls() + absent.calls() == 1 && present.was_called() == opt.is_present(),
                "if_present_or_else_async",
            );
        });
    }
}

fn halve(v: i64) -> Optional<i64> {
    if v % 2 == 0 {
        Optional::Present(v / 2)
    } else {
        Optional::empty()
    }
}

fn expect(out: &mut Vec<(Law, String)>, law: Law, holds: bool, detail: &str) {
    if !holds {
        out.push((law, detail.to_string()));
    }
}

fn check_admission(input: Nullish<i64>, out: &mut Vec<(Law, String)>) {
    let strict = factory::of::<i64>(input);
    let nullable = factory::of_nullable::<i64>(input);
    let undefinable = factory::of_undefinable::<i64>(input);

    let holds = match input {
        Nullish::Value(v) => {
            strict == Ok(Optional::Present(v))
                && nullable == Ok(Optional::Present(v))
                && undefinable == Ok(Optional::Present(v))
        }
        Nullish::Null => {
            strict == Err(OptionalError::Nullish)
                && nullable == Ok(EMPTY.cast())
                && undefinable == Err(OptionalError::Null)
        }
        Nullish::Undefined => {
            strict == Err(OptionalError::Nullish)
                && nullable == Err(OptionalError::Undefined)
                && undefinable == Ok(EMPTY.cast())
        }
    };
    expect(out, Law::AdmissionPolicy, holds, "factory results");
    expect(
        out,
        Law::AdmissionPolicy,
        factory::of_nullish::<i64>(input).is_present() == input.is_value(),
        "of_nullish presence",
    );
}

fn check_sync(opt: Optional<i64>, bound: i64, out: &mut Vec<(Law, String)>) {
    let probe = CallProbe::new();

    let mapped = opt.map(probe.mapper(|v: i64| v.wrapping_add(1)));
    let filtered = opt.filter(probe.predicate::<i64>(true));
    let flat = opt.flat_map(probe.mapper(halve));
    opt.if_present(probe.callback::<i64>());

    match opt {
        Optional::Present(v) => {
            expect(out, Law::ShortCircuit, probe.calls() == 4, "present path calls");
            expect(
                out,
                Law::FlatMapApplication,
                flat == halve(v),
                "flat_map result",
            );
            expect(
                out,
                Law::FilterSemantics,
                filtered == opt && opt.filter(|x| *x > bound) == opt.filter(|_| v > bound),
                "filter result",
            );
            expect(
                out,
                Law::DefaultExtraction,
                opt.or_else(bound) == v && opt.or(Optional::Present(bound)) == opt,
                "or_else on present",
            );
            expect(
                out,
                Law::StringForm,
                opt.to_string() == format!("Optional[{}]", v),
                "present string",
            );
            expect(out, Law::MapRetest, mapped == Optional::Present(v.wrapping_add(1)), "map value");
            expect(
                out,
                Law::MapRetest,
                opt.map::<i64, _, _>(|_| Nullish::Undefined) == EMPTY,
                "map to sentinel",
            );
        }
        Optional::Empty => {
            expect(out, Law::ShortCircuit, !probe.was_called(), "empty path calls");
            expect(
                out,
                Law::CanonicalEmpty,
                mapped == EMPTY && filtered == EMPTY && flat == EMPTY,
                "absent results",
            );
            expect(
                out,
                Law::DefaultExtraction,
                opt.or_else(bound) == bound && opt.or_else_get(|| bound) == bound,
                "or_else on empty",
            );
            expect(
                out,
                Law::DefaultExtraction,
                opt.get() == Err(OptionalError::NotPresent),
                "get on empty",
            );
            expect(
                out,
                Law::StringForm,
                opt.to_string() == "Optional.empty",
                "empty string",
            );
        }
    }
}
