// Pattern 3: Quick Timing with Instant
// A rough, criterion-free comparison for the demo binary. Use `cargo bench` for real numbers.

use crate::big_struct::OBJ;
use crate::calls::{pass_by_reference, pass_by_value};
use crate::config::DemoConfig;
use std::hint::black_box;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub iterations: u64,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn per_call(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        // Duration only divides by u32
        let nanos = self.elapsed.as_nanos() / self.iterations as u128;
        Duration::from_nanos(nanos as u64)
    }

    pub fn nanos_per_call(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

pub fn measure<F>(name: &str, iterations: u64, mut f: F) -> Measurement
where
    F: FnMut(),
{
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    Measurement {
        name: name.to_string(),
        iterations,
        elapsed: start.elapsed(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub by_value: Measurement,
    pub by_reference: Measurement,
}

impl Comparison {
    /// How many times slower the by-value call was. `None` if the reference run took no measurable time.
    pub fn ratio(&self) -> Option<f64> {
        let reference = self.by_reference.nanos_per_call();
        if reference == 0.0 {
            return None;
        }
        Some(self.by_value.nanos_per_call() / reference)
    }
}

pub fn compare(config: &DemoConfig) -> Comparison {
    for _ in 0..config.warmup {
        pass_by_value(black_box(OBJ));
        pass_by_reference(black_box(&OBJ));
    }

    let by_value = measure("pass_by_value", config.iterations, || {
        pass_by_value(black_box(OBJ))
    });
    let by_reference = measure("pass_by_reference", config.iterations, || {
        pass_by_reference(black_box(&OBJ))
    });

    Comparison {
        by_value,
        by_reference,
    }
}
