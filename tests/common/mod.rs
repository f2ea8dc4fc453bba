/// Joins menu inputs into the newline-terminated stream a session reads
/// from stdin.
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
