//! Verbose output formatter

use quillint_core::FileReport;

pub fn output_verbose(reports: &[FileReport]) {
    for report in reports {
        for issue in &report.issues {
            println!(
                "{}:{}:{}: {} [{}] {} (specimen: \"{}\")",
                report.path.display(),
                issue.line_num,
                issue.col,
                issue.name,
                issue.kind,
                issue.message,
                issue.specimen
            );
        }
    }

    let total_issues: usize = reports.iter().map(|r| r.issues.len()).sum();
    println!("{} issues in {} files", total_issues, reports.len());
}
