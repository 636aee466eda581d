/*! Test coverage for the core IR.
 *
 * The builder, printer and verifier each promise small but load-bearing
 * invariants (cursor discipline, deterministic text, structural checks).
 * These tests pin them down with programs built through the public API.
 */

mod format_tests;
