//! Verb-to-dispatch routing
//!
//! Each CLI verb maps to one [`DispatchRequest`]: which executable, which
//! arguments, which environment overrides, which stdio wiring. Routing is a
//! pure function of the verb, its trailing arguments, the active profile,
//! and the depot_tools location — it never spawns anything, so a usage
//! failure here provably happens before any child process exists.

use std::path::Path;

use anyhow::Result;

use crate::config::ActiveConfig;
use crate::error::WrenchError;
use crate::exec::DispatchRequest;

/// Marker telling an Electron-style binary to behave as a plain Node host.
pub const RUN_AS_NODE_ENV: &str = "ELECTRON_RUN_AS_NODE";

/// Points npm's native-module toolchain at the profile's build output.
pub const NPM_NODEDIR_ENV: &str = "npm_config_nodedir";

/// Pre-accepts the depot_tools metrics notice on every depot dispatch.
pub const DEPOT_METRICS_ENV: &str = "DEPOT_TOOLS_METRICS";

/// depot_tools entry points that are python scripts; these are rewritten to
/// run under the vpython interpreter shipped inside the checkout.
const DEPOT_PYTHON_SCRIPTS: &[&str] = &["gclient", "fetch", "roll-dep", "cpplint"];

/// The closed set of dispatching verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `wrench start` / `wrench run` — launch the built application
    Start,
    /// `wrench node` — launch the built application as a Node host
    Node,
    /// `wrench npm` — pass through to npm with the build output wired in
    Npm,
    /// `wrench depot-tools` / `wrench d` — pass through to depot_tools
    Depot,
}

impl Verb {
    fn requires_args(self) -> bool {
        matches!(self, Verb::Node | Verb::Npm | Verb::Depot)
    }

    fn name(self) -> &'static str {
        match self {
            Verb::Start => "start",
            Verb::Node => "node",
            Verb::Npm => "npm",
            Verb::Depot => "depot-tools",
        }
    }
}

/// Build the dispatch request for `verb` with `args` trailing arguments.
///
/// `depot_dir` is the depot_tools checkout the caller has already ensured
/// exists; it is only consulted for [`Verb::Depot`].
pub fn build_request(
    verb: Verb,
    args: &[String],
    config: &ActiveConfig,
    depot_dir: &Path,
) -> Result<DispatchRequest> {
    if verb.requires_args() && args.is_empty() {
        return Err(WrenchError::usage(format!(
            "'wrench {}' requires a command to forward, e.g. wrench {} <cmd...>",
            verb.name(),
            verb.name()
        ))
        .into());
    }

    let request = match verb {
        Verb::Start => DispatchRequest::new(config.exec_path(), args.to_vec()),

        Verb::Node => DispatchRequest::new(config.exec_path(), args.to_vec())
            .env(RUN_AS_NODE_ENV, "1"),

        Verb::Npm => DispatchRequest::new("npm", args.to_vec())
            .env(NPM_NODEDIR_ENV, config.out_dir().display().to_string()),

        Verb::Depot => route_depot(args, depot_dir),
    };

    Ok(request)
}

/// Route a depot_tools sub-verb.
///
/// Python entry points run under `<depot>/vpython3` with the script path
/// spelled out and the cwd moved into the checkout; everything else runs
/// the matching binary from the checkout directly. A bare `--` used only to
/// stop flag parsing is stripped before forwarding.
fn route_depot(args: &[String], depot_dir: &Path) -> DispatchRequest {
    let sub = args[0].as_str();
    let mut rest: Vec<String> = args[1..].to_vec();
    if let Some(pos) = rest.iter().position(|a| a == "--") {
        rest.remove(pos);
    }

    let request = if DEPOT_PYTHON_SCRIPTS.contains(&sub) {
        let interpreter = depot_dir.join(vpython_name());
        let script = depot_dir.join(format!("{}.py", sub));
        let mut forwarded = vec![script.display().to_string()];
        forwarded.extend(rest);
        DispatchRequest::new(interpreter, forwarded).cwd(depot_dir)
    } else {
        DispatchRequest::new(depot_dir.join(sub), rest)
    };

    request.env(DEPOT_METRICS_ENV, "0")
}

fn vpython_name() -> &'static str {
    if cfg!(windows) {
        "vpython3.bat"
    } else {
        "vpython3"
    }
}
