//! Sample AI responses and workspace helpers

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Security scan narrative as returned by the assistant
pub const SECURITY_RESPONSE: &str = "\
# WordPress Security Report

## Summary
The installation at /var/www/html was scanned.

### Findings
- File permissions on wp-config.php are 644; they should be 440.
- Debug mode is enabled.
### You should improve caching
You must disable XML-RPC if it is unused.
We recommend installing a web application firewall.
Fix
";

/// Database optimization narrative
pub const DATABASE_RESPONSE: &str = "\
## Database Optimization Report
Optimized table wp_posts
Optimized table wp_options
Space saved: 4 MB after cleanup
Total space saved: 1.2 GB
You should schedule weekly OPTIMIZE runs.
";

/// Code review narrative
pub const CODE_RESPONSE: &str = "\
Overall the plugin looks reasonable.

## Security
Use nonces.
Sanitize input.
## Performance
Cache queries.
### Standards
";

/// A workspace holding response files
pub struct Workspace {
    /// Keeps the directory alive
    pub dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Write a response file and return its path
    pub fn write(&self, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Workspace root
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
