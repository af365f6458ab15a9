/*! Integration tests for dotmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - resolve: dot-notation get/set/has/forget and the operations on top
 * - flatten: dot/undot/paths round trips
 * - group: grouping, counting, and tree building over record lists
 * - combine: cross products, multi-key sorting, diff/merge, equality
 * - chain: the fluent wrapper, display rendering, JSON boundary
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod chain;
mod combine;
mod flatten;
mod group;
mod helpers;
mod resolve;
