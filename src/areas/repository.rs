use crate::areas::git_cli::GitCli;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    git: GitCli,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?.into_boxed_path();
        let git = GitCli::load_from_env(path);

        Ok(Repository {
            writer: RefCell::new(writer),
            git,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &GitCli {
        &self.git
    }
}
