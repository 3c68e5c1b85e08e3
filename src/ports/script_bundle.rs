use sha2::{Digest, Sha256};

use crate::domain::AppError;

/// A setup script shipped with the system and injected into every payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledScript {
    /// Base file name, e.g. `report-ready.sh`.
    pub name: String,
    /// Raw script text, before environment substitution.
    pub content: String,
    /// Hex-encoded SHA-256 of `content`.
    pub sha256: String,
}

impl BundledScript {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let sha256 = hash_content(&content);
        Self { name: name.into(), content, sha256 }
    }

    /// Only shell scripts are injected.
    pub fn is_shell_script(&self) -> bool {
        self.name.ends_with(".sh")
    }
}

/// Port for enumerating the auxiliary script bundle.
///
/// Scripts are returned in the bundle's enumeration order; injected entries
/// follow that order.
pub trait ScriptBundle: Send + Sync {
    fn scripts(&self) -> Result<Vec<BundledScript>, AppError>;
}

pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_hex_sha256() {
        assert_eq!(
            hash_content("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn only_sh_files_are_shell_scripts() {
        assert!(BundledScript::new("setup.sh", "").is_shell_script());
        assert!(!BundledScript::new("README.md", "").is_shell_script());
    }
}
