// Dweve HCF - Header Config Format
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logging setup.
//!
//! Issues from the parser are `tracing` events; this routes them to stderr.
//! When `RUST_LOG` holds a valid filter it replaces the defaults below
//! entirely. `--verbose` then raises both crates to `debug` on top of it.

use std::io::IsTerminal;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Default directives: warnings from both crates, or debug when verbose.
pub fn default_directives(verbose: bool) -> [&'static str; 2] {
    if verbose {
        ["hcf_core=debug", "hcf_cli=debug"]
    } else {
        ["hcf_core=warn", "hcf_cli=warn"]
    }
}

/// Build the filter from `RUST_LOG`, or from [`default_directives`] when it
/// is unset or invalid.
pub fn build_filter(verbose: bool) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) if verbose => add_directives(filter, default_directives(true)),
        Ok(filter) => filter,
        Err(_) => add_directives(EnvFilter::default(), default_directives(verbose)),
    }
}

fn add_directives(mut filter: EnvFilter, directives: [&str; 2]) -> EnvFilter {
    for directive in directives {
        if let Ok(directive) = directive.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Install the global subscriber writing to stderr.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
