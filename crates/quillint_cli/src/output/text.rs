//! Text output formatter

use quillint_core::FileReport;

pub fn output_text(reports: &[FileReport]) {
    for report in reports {
        if report.issues.is_empty() {
            continue;
        }

        println!("\n{}:", report.path.display());
        for issue in &report.issues {
            println!(
                "  {}:{} [{}] {} (\"{}\")",
                issue.line_num, issue.col, issue.name, issue.message, issue.specimen
            );
        }
    }

    let total_files = reports.len();
    let total_issues: usize = reports.iter().map(|r| r.issues.len()).sum();
    let cached = reports.iter().filter(|r| r.from_cache).count();

    println!();
    println!(
        "Checked {} files ({} from cache), found {} issues",
        total_files, cached, total_issues
    );
}
