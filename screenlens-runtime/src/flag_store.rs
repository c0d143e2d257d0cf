use anyhow::Context;
use parking_lot::Mutex;
use screenlens_core::flags::FlagKey;
use screenlens_engine::traits::FlagStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const FLAGS_FILENAME: &str = "flags.json";

/// Flag store backed by a single JSON document.
///
/// All keys live in one file, so writes are serialized internally: without
/// that, concurrent writers of two different flags could clobber each
/// other while rewriting the document.
#[derive(Debug)]
pub struct JsonFlagStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFlagStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::at_path(dir.join(FLAGS_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> anyhow::Result<BTreeMap<String, bool>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(anyhow::Error::new(e))
                    .with_context(|| format!("read flags: {}", self.path.display()));
            }
        };
        serde_json::from_slice(&bytes).context("decode flags JSON")
    }

    fn save(&self, flags: &BTreeMap<String, bool>) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(flags).context("encode flags JSON")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create state directory: {}", parent.display()))?;
        }

        // Atomic-ish write: write temp then replace.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).with_context(|| format!("write temp: {}", tmp.display()))?;
        replace_file(&tmp, &self.path)
            .with_context(|| format!("replace file: {}", self.path.display()))?;
        Ok(())
    }
}

impl FlagStore for JsonFlagStore {
    fn get(&self, key: FlagKey) -> anyhow::Result<bool> {
        let flags = self.load()?;
        Ok(flags
            .get(key.name())
            .copied()
            .unwrap_or_else(|| key.default_value()))
    }

    fn set(&self, key: FlagKey, value: bool) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock();

        let mut flags = self.load()?;
        flags.insert(key.name().to_string(), value);
        self.save(&flags)
    }
}

fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    // Windows `rename` fails if the destination exists.
    #[cfg(windows)]
    {
        if to.exists() {
            std::fs::remove_file(to)?;
        }
    }

    std::fs::rename(from, to)
}
