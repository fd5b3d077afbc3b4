//! Generated-file banner.

/// Banner prepended to every generated source file.
///
/// Deliberately free of timestamps and tool versions: regenerating with
/// unchanged inputs must produce byte-identical output.
pub const NOTICE: &str = "\
/*
 * THIS FILE WAS AUTOGENERATED. DO NOT EDIT IT DIRECTLY.
 *
 * Edit the files under `data/` and `templates/` instead, then rerun
 * `cargo run -p datagen_runner -- generate` to rebuild it.
 */

";

/// Prepend the generated-file notice to rendered output.
pub fn with_generated_notice(text: &str) -> String {
    let mut out = String::with_capacity(NOTICE.len() + text.len());
    out.push_str(NOTICE);
    out.push_str(text);
    out
}
