//! Build profile and settings configuration
//!
//! A *profile* is a named TOML file describing one checkout + output
//! directory pair; the `active` marker file in the wrench home records which
//! profile dispatches target. `settings.toml` carries tool-level knobs
//! (update throttle, depot_tools location).

mod profile;
mod settings;

pub use profile::{active_profile, read_active_name, set_active, ActiveConfig};
pub use settings::Settings;
