// Pass by Value vs Pass by Reference
// A large fixed-size value, two no-op call targets and the tooling to measure them.

pub mod big_struct;
pub mod calls;
pub mod config;
pub mod error;
pub mod timing;

pub use big_struct::{BigStruct, BUF_LEN, OBJ};
pub use calls::{pass_by_reference, pass_by_value};
pub use config::DemoConfig;
pub use error::DemoError;
pub use timing::{compare, measure, Comparison, Measurement};

pub mod examples {
    //! # Pass by Value vs Pass by Reference
    //!
    //! ## The value
    //! - `BigStruct` wraps a `[u8; 1 << 18]` (256 KiB)
    //! - It is `Copy`, so a by-value call copies every byte
    //! - `OBJ` is the one process-wide instance
    //!
    //! ## The calls
    //! - `pass_by_value` takes the struct itself
    //! - `pass_by_reference` takes `&BigStruct`, a single pointer
    //!
    //! ## Measuring
    //! - `cargo bench` for the criterion comparison
    //! - `cargo run -- --iterations N` for a quick `Instant`-based comparison
}
