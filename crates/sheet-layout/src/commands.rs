//! The fixed table of git commands printed on the sheet.
//!
//! Scanners send a newline (Enter) after every scan, so each `code` is a
//! complete command that runs as-is and never contains a newline itself.

/// One printable git command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitCommand {
    /// Exact text carried by the symbol.
    pub code: &'static str,
    /// Short caption under the symbol. Empty means "use the code".
    pub label: &'static str,
    /// Explanation wrapped under the label.
    pub description: &'static str,
}

impl GitCommand {
    /// Create a command record.
    #[must_use]
    pub const fn new(code: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            code,
            label,
            description,
        }
    }

    /// The caption to print: the label, or the code when the label is empty.
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        if self.label.is_empty() {
            self.code
        } else {
            self.label
        }
    }
}

/// Forty commands, four per row in groups of related tasks.
pub const GIT_COMMANDS: &[GitCommand] = &[
    // Status / inspection
    GitCommand::new("git status", "git status", "Show working tree status."),
    GitCommand::new("git status -sb", "git status -sb", "Short, branch-aware status."),
    GitCommand::new("git diff", "git diff", "Diff unstaged changes."),
    GitCommand::new("git diff --staged", "git diff --staged", "Diff staged changes."),
    // Staging / restoring
    GitCommand::new("git add .", "git add .", "Stage all changes in current repo."),
    GitCommand::new("git add -p", "git add -p", "Interactive patch staging."),
    GitCommand::new("git restore .", "git restore .", "Discard unstaged changes in files."),
    GitCommand::new(
        "git restore --staged .",
        "git restore --staged .",
        "Unstage all changes.",
    ),
    // Common commit messages
    GitCommand::new(
        "git commit -m \"Initial commit\"",
        "Initial commit",
        "Create an initial commit.",
    ),
    GitCommand::new(
        "git commit -m \"Update README\"",
        "Update README",
        "Commit README changes.",
    ),
    GitCommand::new("git commit -m \"Fix bug\"", "Fix bug", "Commit a bugfix."),
    GitCommand::new(
        "git commit -m \"Refactor code\"",
        "Refactor code",
        "Commit refactor changes.",
    ),
    // Commit / log helpers
    GitCommand::new(
        "git commit -m \"WIP\"",
        "WIP commit",
        "Quick work-in-progress commit.",
    ),
    GitCommand::new(
        "git log --oneline --graph --decorate --all",
        "Pretty log",
        "Compact decorated log graph.",
    ),
    GitCommand::new(
        "git log --oneline",
        "Log oneline",
        "Short one-line commit history.",
    ),
    GitCommand::new("git show", "git show", "Show details of the latest commit."),
    // Stash
    GitCommand::new("git stash", "git stash", "Stash uncommitted changes."),
    GitCommand::new("git stash pop", "stash pop", "Apply and drop latest stash."),
    GitCommand::new("git stash list", "stash list", "List all stashes."),
    GitCommand::new("git stash drop", "stash drop", "Drop latest stash."),
    // Branching & navigation
    GitCommand::new("git branch", "git branch", "List local branches."),
    GitCommand::new("git branch -vv", "git branch -vv", "Branches with tracking info."),
    GitCommand::new("git checkout -", "git checkout -", "Switch to previous branch."),
    GitCommand::new("git reflog", "git reflog", "Show reference log for HEAD history."),
    // Sync / remotes
    GitCommand::new(
        "git fetch --all --prune",
        "fetch --all",
        "Fetch all remotes and prune.",
    ),
    GitCommand::new("git pull", "git pull", "Pull from current upstream."),
    GitCommand::new("git push", "git push", "Push current HEAD to upstream."),
    GitCommand::new(
        "git push --set-upstream origin HEAD",
        "push -u origin HEAD",
        "Push and set upstream.",
    ),
    // Tags / metadata
    GitCommand::new("git tag", "git tag", "List tags."),
    GitCommand::new("git tag -l", "git tag -l", "List tags (pattern-capable)."),
    GitCommand::new("git remote -v", "git remote -v", "List remotes and URLs."),
    GitCommand::new(
        "git config --list",
        "git config --list",
        "Show all Git config entries.",
    ),
    // Search / history helpers
    GitCommand::new(
        "git grep -n \"TODO\"",
        "grep TODO",
        "Search TODO in tracked files.",
    ),
    GitCommand::new(
        "git shortlog -sn",
        "shortlog -sn",
        "Author summary (commits per author).",
    ),
    GitCommand::new(
        "git rev-parse --show-toplevel",
        "repo root",
        "Show path to repo root.",
    ),
    GitCommand::new(
        "git rev-parse --abbrev-ref HEAD",
        "current branch",
        "Show current branch name.",
    ),
    // Cleanup / caution
    GitCommand::new(
        "git status --ignored",
        "status ignored",
        "Status including ignored files.",
    ),
    GitCommand::new("git diff --stat", "diff --stat", "Diff summary (per-file stats)."),
    GitCommand::new(
        "git clean -fd",
        "clean -fd",
        "Danger: remove untracked files & dirs.",
    ),
    GitCommand::new(
        "git submodule update --init --recursive",
        "submodules",
        "Init and update submodules.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_entries() {
        assert_eq!(GIT_COMMANDS.len(), 40);
    }

    #[test]
    fn test_codes_are_single_line_git_commands() {
        for command in GIT_COMMANDS {
            assert!(command.code.starts_with("git "), "{}", command.code);
            assert!(!command.code.contains('\n'), "{}", command.code);
            assert!(!command.code.contains('\r'), "{}", command.code);
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = GIT_COMMANDS.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), GIT_COMMANDS.len());
    }

    #[test]
    fn test_empty_label_falls_back_to_code() {
        let command = GitCommand::new("git gc", "", "Collect garbage.");
        assert_eq!(command.display_label(), "git gc");
    }

    #[test]
    fn test_explicit_label_wins() {
        let last = GIT_COMMANDS[GIT_COMMANDS.len() - 1];
        assert_eq!(last.code, "git submodule update --init --recursive");
        assert_eq!(last.display_label(), "submodules");
    }
}
