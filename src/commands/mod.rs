pub mod add;
pub mod info;
pub mod lookup;
pub mod rename;

use crate::models::record::FormattedResult;

/// Print results the way every listing command does: title line, indented
/// description, blank separator.
pub(crate) fn print_results(results: &[FormattedResult]) {
    for result in results {
        println!("{}", result.title);
        for line in result.description.lines() {
            println!("  {}", line);
        }
        println!();
    }
}
