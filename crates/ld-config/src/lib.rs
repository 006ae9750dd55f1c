//! `ld-config` — scenario input for the `lift_dispatch` simulator.
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`loader`]      | JSON scenario and CSV request parsing (`RawConfig`)  |
//! | [`validate`]    | constraint checks → `SimulationConfig`               |
//! | [`synthetic`]   | seeded random request generation                     |
//!
//! ```rust,ignore
//! let raw = ld_config::load_json(Path::new("scenario.json"))?;
//! let cfg = ld_config::validate(&raw)?;
//! let sim = SimBuilder::new(cfg.sim, cfg.fleet, cfg.requests).build()?;
//! ```

pub mod error;
pub mod loader;
pub mod synthetic;
pub mod validate;


pub use error::{ConfigError, ConfigResult};
pub use loader::{
    RawConfig, RawRequest, load_json, load_json_reader, load_json_str, load_requests_csv,
    load_requests_reader,
};
pub use validate::{SimulationConfig, validate};

/// Validate a JSON scenario file in one step.
pub fn load(path: &std::path::Path) -> ConfigResult<SimulationConfig> {
    validate(&load_json(path)?)
}
