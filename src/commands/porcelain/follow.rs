use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_ref::CommitRef;
use crate::artifacts::walk::walker::{BranchWalker, EndMatch, WalkReport};
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Print the commits of `branch_name` from `start` back to `end`, then the
    /// merge heads that were left behind
    ///
    /// Path commits are written as soon as they are found, so a failure part
    /// way through leaves the commits walked so far on the output.
    pub fn follow_branch(
        &self,
        start: &str,
        end: &str,
        branch_name: &str,
        end_match: EndMatch,
    ) -> anyhow::Result<WalkReport> {
        let start = CommitRef::from(start);
        let end = CommitRef::from(end);
        let walker = BranchWalker::try_new(self.git(), end_match)?;

        let report = {
            let mut writer = self.writer();
            walker.walk(&start, &end, branch_name, |commit| {
                writeln!(writer, "{commit}")
            })?
        };

        let mut writer = self.writer();
        writeln!(writer, "Discarded heads:")?;
        writeln!(writer, "{}", report.discarded_line())?;
        writer
            .flush()
            .context("failed to flush follow-branch output")?;

        Ok(report)
    }
}
